use anyhow::Context;
use sid::{Codec, SidConfig};
use std::io::{self, Read, Write};

/// Whitespace separated tokens from stdin, used when no values were given.
fn stdin_tokens() -> anyhow::Result<Vec<String>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input.split_whitespace().map(str::to_string).collect())
}

fn int_inputs(values: Vec<i64>) -> anyhow::Result<Vec<i64>> {
    if !values.is_empty() {
        return Ok(values);
    }
    stdin_tokens()?
        .iter()
        .map(|t| {
            t.parse::<i64>()
                .with_context(|| format!("invalid integer {:?}", t))
        })
        .collect()
}

pub fn encode(codec: &Codec, values: Vec<i64>) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for x in int_inputs(values)? {
        writeln!(out, "{}", codec.encode(x))?;
    }
    Ok(())
}

pub fn decode(codec: &Codec, sids: Vec<String>) -> anyhow::Result<()> {
    let sids = if sids.is_empty() { stdin_tokens()? } else { sids };
    let mut out = io::stdout().lock();
    for s in &sids {
        let x = codec
            .decode(s)
            .with_context(|| format!("failed to decode {:?}", s))?;
        writeln!(out, "{}", x)?;
    }
    Ok(())
}

pub fn permute(values: Vec<i64>, f: impl Fn(i64) -> i64) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for x in int_inputs(values)? {
        writeln!(out, "{}", f(x))?;
    }
    Ok(())
}

pub fn list(config: &SidConfig) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "Alphabets:\n")?;
    let mut alphabets: Vec<_> = config.alphabets.iter().collect();
    alphabets.sort_by_key(|(name, _)| *name);
    for (name, alphabet) in alphabets {
        let count = alphabet.chars.chars().count();
        let preview: String = alphabet.chars.chars().take(20).collect();
        let suffix = if count > 20 { "..." } else { "" };
        writeln!(out, "  {:<15} base-{:<3} {}{}", name, count, preview, suffix)?;
    }

    writeln!(out, "\nCodecs:\n")?;
    let mut codecs: Vec<_> = config.codecs.iter().collect();
    codecs.sort_by_key(|(name, _)| *name);
    for (name, codec) in codecs {
        writeln!(
            out,
            "  {:<15} alphabet={} min_length={} bit_width={} pad={:?}",
            name, codec.alphabet, codec.min_length, codec.bit_width, codec.pad
        )?;
    }
    Ok(())
}

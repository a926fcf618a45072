mod args;
mod handlers;

use anyhow::Context;
use clap::Parser;
use sid::{Codec, SidConfig};

use args::{Cli, Command, GlobalArgs};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.global)?;

    match cli.command {
        Command::List => handlers::list(&config),
        Command::Encode(args) => {
            let codec = resolve_codec(&config, &cli.global)?;
            handlers::encode(&codec, args.values)
        }
        Command::Decode(args) => {
            let codec = resolve_codec(&config, &cli.global)?;
            handlers::decode(&codec, args.sids)
        }
        Command::Shuffle(args) => {
            let codec = resolve_codec(&config, &cli.global)?;
            handlers::permute(args.values, |x| codec.shuffle(x))
        }
        Command::Unshuffle(args) => {
            let codec = resolve_codec(&config, &cli.global)?;
            handlers::permute(args.values, |x| codec.unshuffle(x))
        }
    }
}

fn load_config(global: &GlobalArgs) -> anyhow::Result<SidConfig> {
    let mut config = SidConfig::load_with_overrides()?;
    if let Some(path) = &global.config {
        let extra = SidConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        config.merge(extra);
    }
    Ok(config)
}

/// Starts from the selected profile and applies command-line overrides.
fn resolve_codec(config: &SidConfig, global: &GlobalArgs) -> anyhow::Result<Codec> {
    let mut profile = config
        .get_codec(&global.profile)
        .cloned()
        .ok_or_else(|| sid::ConfigError::UnknownProfile(global.profile.clone()))?;

    if let Some(name) = &global.alphabet {
        profile.alphabet = name.clone();
    }
    if let Some(min_length) = global.min_length {
        profile.min_length = min_length;
    }
    if let Some(bit_width) = global.bit_width {
        profile.bit_width = bit_width;
    }
    if let Some(pad) = global.pad {
        profile.pad = pad.to_string();
    }

    tracing::debug!(?profile, "resolved codec profile");
    Ok(config.build(&profile)?)
}

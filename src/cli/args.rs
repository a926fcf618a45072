use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sid")]
#[command(version)]
#[command(
    about = "Encode integers as short, non-sequential ids and decode them back",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Codec selection, shared by every subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Codec profile from the configuration
    #[arg(short = 'p', long, global = true, default_value = "default")]
    pub profile: String,

    /// Override the minimum sid length
    #[arg(short = 'n', long, global = true)]
    pub min_length: Option<usize>,

    /// Override the number of shuffled low bits (0-63)
    #[arg(short = 'b', long, global = true)]
    pub bit_width: Option<u32>,

    /// Override the pad character
    #[arg(long, global = true)]
    pub pad: Option<char>,

    /// Override the alphabet by name
    #[arg(short = 'a', long, global = true)]
    pub alphabet: Option<String>,

    /// Extra configuration file layered over the built-ins
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode integers to sids (reads stdin if none given)
    Encode(IntArgs),
    /// Decode sids to integers (reads stdin if none given)
    Decode(SidArgs),
    /// Shuffle integers without base conversion
    Shuffle(IntArgs),
    /// Reverse a shuffle
    Unshuffle(IntArgs),
    /// List alphabets and codec profiles
    List,
}

#[derive(Args, Debug)]
pub struct IntArgs {
    #[arg(value_name = "INT", allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct SidArgs {
    #[arg(value_name = "SID")]
    pub sids: Vec<String>,
}

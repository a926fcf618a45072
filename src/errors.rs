//! Error types for codec construction, decoding and configuration.

use thiserror::Error;

/// Errors produced while building a [`Codec`](crate::Codec) or decoding a sid.
///
/// Construction errors (`InvalidAlphabet`, `InvalidPadding`, `InvalidBitWidth`)
/// mean the configuration is unusable. Decode errors (`EmptyInput`,
/// `InvalidCharacter`, `Overflow`) describe malformed input and are safe to
/// hand back to whoever supplied the string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The alphabet is too small, too large, has duplicates or unprintable characters
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// The pad character cannot be used with this alphabet
    #[error("invalid pad character {0:?}: {1}")]
    InvalidPadding(char, String),

    /// More bits requested for shuffling than an i64 can hold
    #[error("invalid bit width {0}: must be between 0 and {max}", max = crate::MAX_BIT_WIDTH)]
    InvalidBitWidth(u32),

    /// The input string is empty
    #[error("cannot decode empty input")]
    EmptyInput,

    /// The input contains a character outside the alphabet and pad set
    #[error("invalid character {char:?} at position {position}")]
    InvalidCharacter { char: char, position: usize },

    /// The decoded value does not fit in 64 bits
    #[error("sid {0:?} is out of range for a 64-bit integer")]
    Overflow(String),
}

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("codec profile '{0}' not found")]
    UnknownProfile(String),

    #[error("alphabet '{0}' not found")]
    UnknownAlphabet(String),

    #[error("pad must be exactly one character, got {0:?}")]
    BadPad(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

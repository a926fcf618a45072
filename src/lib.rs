//! Reversible integer obfuscation.
//!
//! A [`Codec`] maps an `i64` to a short printable string (a "sid") and back.
//! The low bits of the integer are reversed before it is written in the base
//! of a custom alphabet, so consecutive integers produce unrelated-looking
//! sids. This is obfuscation, not encryption: anyone who knows the codec
//! parameters can invert it.
//!
//! ```
//! let codec = sid::Codec::builder().min_length(4).bit_width(24).build().unwrap();
//! let s = codec.encode(12);
//! assert_eq!(s, "yNvD");
//! assert_eq!(codec.decode(&s).unwrap(), 12);
//! ```
//!
//! The free functions [`encode`], [`decode`], [`shuffle`] and [`unshuffle`]
//! use a process-wide default codec that can be replaced with
//! [`set_default_codec`].

mod alphabet;
mod codec;
mod config;
mod default_codec;
mod encoding;
mod errors;
mod shuffle;

pub use alphabet::{ALPHABET, ALPHABET_CANONICAL, Alphabet, MAX_ALPHABET_LEN};
pub use codec::{Codec, CodecBuilder, DEFAULT_BIT_WIDTH, DEFAULT_MIN_LENGTH, DEFAULT_PAD};
pub use config::{AlphabetConfig, CodecConfig, SidConfig};
pub use default_codec::{decode, default_codec, encode, set_default_codec, shuffle, unshuffle};
pub use errors::{CodecError, ConfigError};

/// Largest number of low bits that can be shuffled.
pub const MAX_BIT_WIDTH: u32 = 63;

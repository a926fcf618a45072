//! Process-wide default codec used by the free functions in the crate root.
//!
//! The default starts as [`Codec::default`] and can be replaced at any time
//! with [`set_default_codec`]. Readers take an `Arc` snapshot, so a swap never
//! exposes a partially built codec and never blocks a concurrent encode.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::codec::Codec;
use crate::errors::CodecError;

static DEFAULT: LazyLock<ArcSwap<Codec>> =
    LazyLock::new(|| ArcSwap::from_pointee(Codec::default()));

/// Returns a snapshot of the current default codec.
pub fn default_codec() -> Arc<Codec> {
    DEFAULT.load_full()
}

/// Replaces the default codec, returning the previous one.
pub fn set_default_codec(codec: Codec) -> Arc<Codec> {
    tracing::debug!(
        min_length = codec.min_length(),
        bit_width = codec.bit_width(),
        pad = %codec.pad(),
        base = codec.alphabet().base(),
        "replacing default codec"
    );
    DEFAULT.swap(Arc::new(codec))
}

/// Encodes an integer with the default codec.
pub fn encode(x: i64) -> String {
    DEFAULT.load().encode(x)
}

/// Decodes a sid with the default codec.
pub fn decode(s: &str) -> Result<i64, CodecError> {
    DEFAULT.load().decode(s)
}

/// Shuffles an integer with the default codec.
pub fn shuffle(x: i64) -> i64 {
    DEFAULT.load().shuffle(x)
}

/// Unshuffles an integer with the default codec.
pub fn unshuffle(x: i64) -> i64 {
    DEFAULT.load().unshuffle(x)
}

use crate::alphabet::{ALPHABET, Alphabet};
use crate::encoding::{debase, enbase};
use crate::errors::CodecError;
use crate::shuffle;
use crate::MAX_BIT_WIDTH;

/// Default minimum output length.
pub const DEFAULT_MIN_LENGTH: usize = 4;
/// Default number of shuffled low bits.
pub const DEFAULT_BIT_WIDTH: u32 = 24;
/// Default pad character.
pub const DEFAULT_PAD: char = '0';

/// Reversible integer to sid codec.
///
/// Encoding reverses the low `bit_width` bits of the input, then writes the
/// result in the alphabet's base, left-padded with `pad` to at least
/// `min_length` characters. Decoding runs the same steps backwards.
///
/// The digit step treats the shuffled value as its unsigned two's complement
/// bit pattern, so every `i64` has a sid and negative values round-trip too.
///
/// A `Codec` is immutable once built and can be shared freely across threads.
///
/// ```
/// use sid::Codec;
///
/// let codec = Codec::new(4, 24, '0', sid::ALPHABET).unwrap();
/// assert_eq!(codec.encode(12), "yNvD");
/// assert_eq!(codec.decode("yNvD").unwrap(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
    min_length: usize,
    bit_width: u32,
    pad: char,
}

impl Codec {
    /// Creates a codec.
    ///
    /// * `min_length` - minimum length of every encoded sid
    /// * `bit_width` - how many low bits are shuffled; 0 gives plain base conversion
    /// * `pad` - character prepended when a sid is shorter than `min_length`
    /// * `alphabet` - digit characters, digit 0 first
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::InvalidAlphabet`] if the alphabet is invalid
    /// or holds the pad character as a non-zero digit, with
    /// [`CodecError::InvalidPadding`] if the pad is not printable, and with
    /// [`CodecError::InvalidBitWidth`] if `bit_width` exceeds 63.
    pub fn new(
        min_length: usize,
        bit_width: u32,
        pad: char,
        alphabet: &str,
    ) -> Result<Self, CodecError> {
        Self::from_alphabet(min_length, bit_width, pad, Alphabet::new(alphabet)?)
    }

    /// Creates a codec from an already validated alphabet.
    pub fn from_alphabet(
        min_length: usize,
        bit_width: u32,
        pad: char,
        alphabet: Alphabet,
    ) -> Result<Self, CodecError> {
        if bit_width > MAX_BIT_WIDTH {
            return Err(CodecError::InvalidBitWidth(bit_width));
        }
        if !pad.is_ascii_graphic() {
            return Err(CodecError::InvalidPadding(
                pad,
                "must be printable ASCII".to_string(),
            ));
        }
        // The pad always decodes as zero, so it may only double as digit 0.
        if let Some(digit) = alphabet.decode_char(pad) {
            if digit != 0 {
                return Err(CodecError::InvalidAlphabet(format!(
                    "contains pad character {:?} as digit {}",
                    pad, digit
                )));
            }
        }

        Ok(Codec {
            alphabet,
            min_length,
            bit_width,
            pad,
        })
    }

    /// Creates a builder starting from the default parameters.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Encodes an integer to a sid.
    pub fn encode(&self, x: i64) -> String {
        enbase(
            self.shuffle(x) as u64,
            &self.alphabet,
            self.min_length,
            self.pad,
        )
    }

    /// Decodes a sid back to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EmptyInput`] for an empty string,
    /// [`CodecError::InvalidCharacter`] for characters outside the alphabet
    /// and pad set, and
    /// [`CodecError::Overflow`] if the value does not fit in 64 bits.
    pub fn decode(&self, s: &str) -> Result<i64, CodecError> {
        let x = debase(s, &self.alphabet, self.pad)?;
        Ok(self.unshuffle(x as i64))
    }

    /// Converts an integer to a shuffled integer.
    pub fn shuffle(&self, x: i64) -> i64 {
        shuffle::shuffle(x, self.bit_width)
    }

    /// Converts a shuffled integer back to its original value.
    pub fn unshuffle(&self, x: i64) -> i64 {
        shuffle::unshuffle(x, self.bit_width)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    /// Mask selecting the shuffled low bits.
    pub fn mask(&self) -> i64 {
        shuffle::mask(self.bit_width) as i64
    }
}

impl Default for Codec {
    fn default() -> Self {
        Codec::builder()
            .build()
            .expect("built-in codec parameters are valid")
    }
}

/// Builder for [`Codec`] with the crate defaults pre-filled.
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    min_length: usize,
    bit_width: u32,
    pad: char,
    alphabet: String,
}

impl CodecBuilder {
    pub fn new() -> Self {
        CodecBuilder {
            min_length: DEFAULT_MIN_LENGTH,
            bit_width: DEFAULT_BIT_WIDTH,
            pad: DEFAULT_PAD,
            alphabet: ALPHABET.to_string(),
        }
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn bit_width(mut self, bit_width: u32) -> Self {
        self.bit_width = bit_width;
        self
    }

    pub fn pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn build(self) -> Result<Codec, CodecError> {
        Codec::new(self.min_length, self.bit_width, self.pad, &self.alphabet)
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::errors::CodecError;

/// Default shuffled alphabet (53 characters).
pub const ALPHABET: &str = "JedR8LNFY2j6MrhkBSADUyfP5amuH9xQCX4VqbgpsGtnW7vc3TwKE";

/// Lowercase alphanumeric alphabet without look-alike characters (31 characters).
pub const ALPHABET_CANONICAL: &str = "mn6j2c4rv8bpygw95z7hsdaetxuk3fq";

/// Largest alphabet the lookup table accepts.
pub const MAX_ALPHABET_LEN: usize = 75;

/// Sentinel marking a byte with no digit value.
const ABSENT: u8 = u8::MAX;

/// Ordered set of digit characters with a reverse lookup table.
///
/// Only printable, non-space ASCII characters are accepted, so every digit
/// fits in one byte and the reverse table can be indexed by the raw byte.
/// Bytes outside the alphabet map to a sentinel and are reported as missing
/// by [`Alphabet::decode_char`].
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<u8>,
    lookup: [u8; 128],
}

impl Alphabet {
    /// Creates an alphabet from a string of characters.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidAlphabet`] if the alphabet has fewer than
    /// two characters, more than [`MAX_ALPHABET_LEN`], duplicates, or any
    /// character that is not printable ASCII.
    pub fn new(s: &str) -> Result<Self, CodecError> {
        let mut chars = Vec::with_capacity(s.len());
        let mut lookup = [ABSENT; 128];

        for c in s.chars() {
            if !c.is_ascii_graphic() {
                return Err(CodecError::InvalidAlphabet(format!(
                    "character {:?} is not printable ASCII",
                    c
                )));
            }
            if chars.len() == MAX_ALPHABET_LEN {
                return Err(CodecError::InvalidAlphabet(format!(
                    "more than {} characters",
                    MAX_ALPHABET_LEN
                )));
            }
            let b = c as u8;
            if lookup[b as usize] != ABSENT {
                return Err(CodecError::InvalidAlphabet(format!(
                    "duplicate character {:?}",
                    c
                )));
            }
            lookup[b as usize] = chars.len() as u8;
            chars.push(b);
        }

        if chars.len() < 2 {
            return Err(CodecError::InvalidAlphabet(format!(
                "need at least 2 characters, got {}",
                chars.len()
            )));
        }

        Ok(Alphabet { chars, lookup })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Returns the alphabet as a string, digit 0 first.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII bytes.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).map(|&b| b as char)
    }

    /// Raw byte for a digit already reduced modulo the base.
    pub(crate) fn digit(&self, digit: usize) -> u8 {
        self.chars[digit]
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        match self.lookup[c as usize] {
            ABSENT => None,
            d => Some(d as usize),
        }
    }

    /// Returns `true` if `c` is one of the alphabet's digits.
    pub fn contains(&self, c: char) -> bool {
        self.decode_char(c).is_some()
    }
}

impl std::str::FromStr for Alphabet {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for Alphabet {}

use crate::alphabet::Alphabet;
use crate::errors::CodecError;

/// Enough room for a u64 in base 2.
const MAX_DIGITS: usize = u64::BITS as usize;

/// Writes `x` in the alphabet's base, most significant digit first, and
/// left-pads with `pad` up to `min_length` characters.
pub fn enbase(mut x: u64, alphabet: &Alphabet, min_length: usize, pad: char) -> String {
    let base = alphabet.base() as u64;

    // Digits come out least significant first, so fill from the back.
    let mut buf = [0u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;
    while x >= base {
        start -= 1;
        buf[start] = alphabet.digit((x % base) as usize);
        x /= base;
    }
    start -= 1;
    buf[start] = alphabet.digit(x as usize);

    let digits = &buf[start..];
    let mut result = String::with_capacity(min_length.max(digits.len()));
    for _ in digits.len()..min_length {
        result.push(pad);
    }
    result.extend(digits.iter().map(|&b| b as char));
    result
}

/// Parses a string produced by [`enbase`].
///
/// The `pad` character counts as a zero digit wherever it appears. Every
/// other character must belong to the alphabet.
pub fn debase(encoded: &str, alphabet: &Alphabet, pad: char) -> Result<u64, CodecError> {
    if encoded.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    for (position, c) in encoded.chars().enumerate() {
        if c != pad && !alphabet.contains(c) {
            return Err(CodecError::InvalidCharacter { char: c, position });
        }
    }

    let base = alphabet.base() as u64;
    let overflow = || CodecError::Overflow(encoded.to_string());

    let mut result: u64 = 0;
    for (position, c) in encoded.chars().rev().enumerate() {
        let digit = if c == pad {
            0
        } else {
            alphabet.decode_char(c).unwrap_or(0) as u64
        };
        if digit == 0 {
            continue;
        }
        let weight = u32::try_from(position)
            .ok()
            .and_then(|p| base.checked_pow(p))
            .ok_or_else(overflow)?;
        result = digit
            .checked_mul(weight)
            .and_then(|v| result.checked_add(v))
            .ok_or_else(overflow)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;

    fn alphabet() -> Alphabet {
        Alphabet::new(ALPHABET).unwrap()
    }

    #[test]
    fn test_enbase_reference() {
        assert_eq!(enbase(3145728, &alphabet(), 4, '0'), "yNvD");
        assert_eq!(debase("yNvD", &alphabet(), '0'), Ok(3145728));
    }

    #[test]
    fn test_enbase_zero_pads_to_min_length() {
        let s = enbase(0, &alphabet(), 4, '0');
        assert_eq!(s, "000J");
        assert_eq!(debase(&s, &alphabet(), '0'), Ok(0));
    }

    #[test]
    fn test_enbase_no_padding_when_long_enough() {
        assert_eq!(enbase(52, &alphabet(), 1, '0'), "E");
        assert_eq!(enbase(53, &alphabet(), 0, '0'), "eJ");
    }

    #[test]
    fn test_max_value() {
        let s = enbase(u64::MAX, &alphabet(), 4, '0');
        assert_eq!(s, "eEaSNLK3fJ4h");
        assert_eq!(debase(&s, &alphabet(), '0'), Ok(u64::MAX));
    }

    #[test]
    fn test_binary_alphabet_uses_all_digits() {
        let binary = Alphabet::new("01").unwrap();
        let s = enbase(u64::MAX, &binary, 0, '_');
        assert_eq!(s.len(), 64);
        assert_eq!(debase(&s, &binary, '_'), Ok(u64::MAX));
    }

    #[test]
    fn test_debase_empty() {
        assert_eq!(debase("", &alphabet(), '0'), Err(CodecError::EmptyInput));
    }

    #[test]
    fn test_debase_invalid_character() {
        assert_eq!(
            debase("yN!D", &alphabet(), '0'),
            Err(CodecError::InvalidCharacter {
                char: '!',
                position: 2
            })
        );
    }

    #[test]
    fn test_debase_pad_is_zero_anywhere() {
        assert_eq!(debase("0000", &alphabet(), '0'), Ok(0));
        // 'J' is digit 0 of the default alphabet.
        assert_eq!(
            debase("y0vD", &alphabet(), '0'),
            debase("yJvD", &alphabet(), '0')
        );
        assert_eq!(
            debase("0y0D", &alphabet(), '0'),
            debase("JyJD", &alphabet(), '0')
        );
        assert_eq!(debase("yNv0", &alphabet(), '0'), debase("yNvJ", &alphabet(), '0'));
    }

    #[test]
    fn test_debase_long_padding_does_not_overflow() {
        let s = format!("{}yNvD", "0".repeat(100));
        assert_eq!(debase(&s, &alphabet(), '0'), Ok(3145728));
    }

    #[test]
    fn test_debase_overflow() {
        assert!(matches!(
            debase("EEEEEEEEEEEEE", &alphabet(), '0'),
            Err(CodecError::Overflow(_))
        ));
        // One past u64::MAX in the last digit.
        assert!(matches!(
            debase("eEaSNLK3fJ4k", &alphabet(), '0'),
            Err(CodecError::Overflow(_))
        ));
    }
}

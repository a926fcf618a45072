//! Bit permutation applied before digit encoding.
//!
//! The low `width` bits are reversed, bits above the window pass through
//! unchanged. Reversal is its own inverse, so [`unshuffle`] is the same
//! transform as [`shuffle`].

/// Mask selecting the low `width` bits. `width` must be at most 63.
pub fn mask(width: u32) -> u64 {
    debug_assert!(width <= crate::MAX_BIT_WIDTH);
    (1u64 << width) - 1
}

/// Reverses the order of the low `width` bits of `x`.
pub fn shuffle(x: i64, width: u32) -> i64 {
    if width == 0 {
        return x;
    }
    let bits = x as u64;
    let mask = mask(width);
    let window = (bits & mask).reverse_bits() >> (64 - width);
    (window | (bits & !mask)) as i64
}

/// Restores a value produced by [`shuffle`] with the same `width`.
pub fn unshuffle(x: i64, width: u32) -> i64 {
    shuffle(x, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector() {
        assert_eq!(shuffle(12, 24), 3145728);
        assert_eq!(unshuffle(3145728, 24), 12);
    }

    #[test]
    fn test_zero_width_is_identity() {
        for x in [0, 1, 12, -1, i64::MIN, i64::MAX] {
            assert_eq!(shuffle(x, 0), x);
        }
        assert_eq!(mask(0), 0);
    }

    #[test]
    fn test_high_bits_untouched() {
        let x = (0x5a_i64 << 40) | 0b1011;
        let y = shuffle(x, 8);
        assert_eq!(y >> 8, x >> 8);
        assert_eq!(y & 0xff, 0b1101_0000);
    }

    #[test]
    fn test_negative_sign_bit_outside_window() {
        let y = shuffle(-2, 4);
        assert!(y < 0);
        assert_eq!(y, -9);
        assert_eq!(unshuffle(y, 4), -2);
    }

    #[test]
    fn test_full_width() {
        assert_eq!(mask(63), i64::MAX as u64);
        assert_eq!(shuffle(1, 63), 1 << 62);
        assert_eq!(shuffle(i64::MIN, 63), i64::MIN);
        assert_eq!(shuffle(i64::MIN | 1, 63), i64::MIN | (1 << 62));
    }

    #[test]
    fn test_involution_sweep() {
        for width in [0, 1, 7, 24, 32, 63] {
            for x in (-5000..5000).chain([i64::MIN, i64::MAX]) {
                assert_eq!(shuffle(shuffle(x, width), width), x);
            }
        }
    }
}

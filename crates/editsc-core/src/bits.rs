//! Inclusive bit-range extraction and insertion on 32-bit words.
//!
//! Ranges are written `lowest..=highest`, counted from the least significant
//! bit. Violating `lowest <= highest < 32` is a caller bug and panics.

const WORD_BITS: u32 = u32::BITS;

#[inline]
fn check_range(lowest: u32, highest: u32) {
    assert!(
        lowest <= highest && highest < WORD_BITS,
        "invalid bit range {lowest}..={highest} for a {WORD_BITS}-bit word"
    );
}

/// Mask with the low `width` bits set. `width` is in `1..=32`.
#[inline]
fn low_mask(width: u32) -> u32 {
    u32::MAX >> (WORD_BITS - width)
}

/// Returns bits `lowest..=highest` of `value`, shifted down to bit 0.
///
/// ```
/// use editsc_core::bits::get_bits;
/// assert_eq!(get_bits(0b100110, 2, 5), 0b1001);
/// ```
pub fn get_bits(value: u32, lowest: u32, highest: u32) -> u32 {
    check_range(lowest, highest);
    (value >> lowest) & low_mask(highest - lowest + 1)
}

/// Returns `value` with bits `lowest..=highest` replaced by the low bits of
/// `newvalue`. Bits of `newvalue` beyond the range width are discarded.
///
/// ```
/// use editsc_core::bits::set_bits;
/// assert_eq!(set_bits(0b110011, 2, 5, 0b0110), 0b011011);
/// ```
pub fn set_bits(value: u32, lowest: u32, highest: u32, newvalue: u32) -> u32 {
    check_range(lowest, highest);
    let field = low_mask(highest - lowest + 1) << lowest;
    (value & !field) | ((newvalue << lowest) & field)
}

/// Variant of [`set_bits`] that does not mask `newvalue`.
///
/// Excess high bits of `newvalue` are OR-ed into the word above the range,
/// which is how older editor tooling wrote fields. Only use this when
/// bit-exact agreement with such files matters.
pub fn set_bits_unmasked(value: u32, lowest: u32, highest: u32, newvalue: u32) -> u32 {
    check_range(lowest, highest);
    let field = low_mask(highest - lowest + 1) << lowest;
    (value & !field) | newvalue.wrapping_shl(lowest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bits_examples() {
        assert_eq!(get_bits(0b100110, 2, 5), 0b1001);
        assert_eq!(get_bits(0b1001, 0, 3), 0b1001);
        assert_eq!(get_bits(0b11111001, 0, 3), 0b1001);
    }

    #[test]
    fn test_set_bits_example() {
        assert_eq!(set_bits(0b110011, 2, 5, 0b0110), 0b011011);
    }

    #[test]
    fn test_full_width_range() {
        assert_eq!(get_bits(0xDEAD_BEEF, 0, 31), 0xDEAD_BEEF);
        assert_eq!(set_bits(0x1234_5678, 0, 31, 0xCAFE_BABE), 0xCAFE_BABE);
        assert_eq!(get_bits(0x8000_0000, 31, 31), 1);
    }

    #[test]
    fn test_set_then_get_is_inverse() {
        let values = [0u32, 1, 0x0004_0007, 0xFFFF_FFFF, 0xA5A5_5A5A, 0x8000_0001];
        let inserts = [0u32, 1, 0b1011, 0xFFFF, 0xFFFF_FFFF, 0x1234_5678];
        for &value in &values {
            for lowest in 0..32 {
                for highest in lowest..32 {
                    for &v in &inserts {
                        let width = highest - lowest + 1;
                        let expected = if width == 32 { v } else { v & ((1 << width) - 1) };
                        let result = set_bits(value, lowest, highest, v);
                        assert_eq!(
                            get_bits(result, lowest, highest),
                            expected,
                            "value={value:#x} range={lowest}..={highest} v={v:#x}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_set_bits_preserves_outside_range() {
        let value = 0xA5A5_5A5A;
        for lowest in 0..32 {
            for highest in lowest..32 {
                let result = set_bits(value, lowest, highest, 0xFFFF_FFFF);
                for bit in (0..32).filter(|b| *b < lowest || *b > highest) {
                    assert_eq!(
                        (result >> bit) & 1,
                        (value >> bit) & 1,
                        "bit {bit} changed for range {lowest}..={highest}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_unmasked_leaks_into_higher_bits() {
        // 0b1_0110 is one bit wider than the 4-bit range at 2..=5
        assert_eq!(set_bits_unmasked(0, 2, 5, 0b1_0110), 0b101_1000);
        assert_eq!(set_bits(0, 2, 5, 0b1_0110), 0b001_1000);
        // Within width both variants agree
        assert_eq!(
            set_bits_unmasked(0b110011, 2, 5, 0b0110),
            set_bits(0b110011, 2, 5, 0b0110)
        );
    }

    #[test]
    #[should_panic(expected = "invalid bit range")]
    fn test_reversed_range_panics() {
        get_bits(0, 5, 2);
    }

    #[test]
    #[should_panic(expected = "invalid bit range")]
    fn test_range_past_word_panics() {
        set_bits(0, 30, 32, 1);
    }
}

//! Transformer - Original (本卦) to changed (变卦) hexagram
//!
//! Line position `p` (1 = bottom) sits at string index `6 - p`; flipping a
//! line and diffing two binaries both go through that one mapping.

use super::encoder::encode_trigram;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{HexagramBinary, MovingLineSet, LINE_COUNT};

/// Binary of the hexagram stacked from two trigram sequence numbers (1..=8)
pub fn base_binary(upper: u8, lower: u8) -> Result<HexagramBinary, DomainError> {
    let upper_bits = encode_trigram(upper.wrapping_sub(1))?;
    let lower_bits = encode_trigram(lower.wrapping_sub(1))?;
    HexagramBinary::parse(&format!("{}{}", upper_bits, lower_bits))
}

/// Flip every line in `lines`; the empty set leaves `base` unchanged
pub fn apply_moving_lines(base: &HexagramBinary, lines: &MovingLineSet) -> HexagramBinary {
    lines.iter().fold(base.clone(), |binary, position| {
        binary.flipped_at(LINE_COUNT - usize::from(position))
    })
}

/// Positions at which two binaries differ
pub fn moving_lines_from_diff(base: &HexagramBinary, changed: &HexagramBinary) -> MovingLineSet {
    let positions = base
        .as_str()
        .bytes()
        .zip(changed.as_str().bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(index, _)| (LINE_COUNT - index) as u8);
    MovingLineSet::from_valid_positions(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(bits: &str) -> HexagramBinary {
        HexagramBinary::parse(bits).unwrap()
    }

    #[test]
    fn test_base_binary() {
        assert_eq!(base_binary(1, 8).unwrap(), bin("000111"));
        assert_eq!(base_binary(7, 6).unwrap(), bin("011101"));
        assert!(matches!(
            base_binary(0, 1),
            Err(DomainError::InvalidTrigramIndex(_))
        ));
        assert!(base_binary(1, 9).is_err());
    }

    #[test]
    fn test_apply_moving_lines() {
        let base = bin("011101");
        let single = MovingLineSet::single(2).unwrap();
        assert_eq!(apply_moving_lines(&base, &single), bin("011111"));

        let pair = MovingLineSet::from_positions([2, 5]).unwrap();
        assert_eq!(apply_moving_lines(&bin("101010"), &pair), bin("111000"));
    }

    #[test]
    fn test_empty_set_is_identity() {
        for value in 0..64u32 {
            let b = bin(&format!("{:06b}", value));
            assert_eq!(apply_moving_lines(&b, &MovingLineSet::new()), b);
        }
    }

    #[test]
    fn test_diff_inverts_apply() {
        for left in 0..64u32 {
            for right in 0..64u32 {
                let b1 = bin(&format!("{:06b}", left));
                let b2 = bin(&format!("{:06b}", right));
                let diff = moving_lines_from_diff(&b1, &b2);
                assert_eq!(diff.len() as u32, (left ^ right).count_ones());
                assert_eq!(apply_moving_lines(&b1, &diff), b2);
            }
        }
    }

    #[test]
    fn test_diff_all_lines() {
        let diff = moving_lines_from_diff(&bin("000111"), &bin("111000"));
        assert_eq!(diff.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }
}

//! Encoder - Symbol numbering and trigram bit encoding
//!
//! Pure arithmetic used by time-based casting: branch/stem numbers, the
//! bit-reversed trigram encoding and the three indices derived from a moment.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Branch, Stem, Trigram};

/// Width of a trigram in bits
pub const TRIGRAM_WIDTH: usize = 3;

/// Upper and lower trigram sequence numbers (1..=8) plus the moving line
/// position (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagramIndices {
    pub upper: u8,
    pub lower: u8,
    pub moving_line: u8,
}

/// 1-based number of a branch (子 = 1 .. 亥 = 12)
///
/// With `is_month` the month-branch offset `((base + 10) mod 12) + 1` is
/// applied. Time-based casting feeds the lunar month number directly and
/// never asks for it.
pub fn branch_number(branch: Branch, is_month: bool) -> u8 {
    let base = branch.index() as u8 + 1;
    if is_month {
        ((base + 10) % 12) + 1
    } else {
        base
    }
}

/// Same as [`branch_number`] for a branch given as text
pub fn branch_number_of(symbol: &str, is_month: bool) -> Result<u8, DomainError> {
    Ok(branch_number(symbol.parse()?, is_month))
}

/// 1-based number of a stem (甲 = 1 .. 癸 = 10)
pub fn stem_number(stem: Stem) -> u8 {
    stem.index() as u8 + 1
}

/// Same as [`stem_number`] for a stem given as text
pub fn stem_number_of(symbol: &str) -> Result<u8, DomainError> {
    Ok(stem_number(symbol.parse()?))
}

/// Binary digits of `number`, zero-padded to `width`, then reversed
pub fn binary_representation(number: u32, width: usize) -> String {
    format!("{:0width$b}", number, width = width)
        .chars()
        .rev()
        .collect()
}

/// Three-character bits of the trigram at `index` (0..=7)
pub fn encode_trigram(index: u8) -> Result<String, DomainError> {
    if usize::from(index) >= Trigram::ALL.len() {
        return Err(DomainError::InvalidTrigramIndex(index));
    }
    Ok(binary_representation(u32::from(index), TRIGRAM_WIDTH))
}

pub fn trigram_bits(trigram: Trigram) -> String {
    binary_representation(u32::from(trigram.index()), TRIGRAM_WIDTH)
}

/// Trigram whose encoding is `bits`
pub fn decode_trigram(bits: &str) -> Result<Trigram, DomainError> {
    Trigram::ALL
        .into_iter()
        .find(|trigram| trigram_bits(*trigram) == bits)
        .ok_or_else(|| DomainError::UnknownTrigram(bits.to_string()))
}

/// `value mod n`, with a zero remainder mapped to `n`
fn wrap_nonzero(value: i64, n: i64) -> u8 {
    match value.rem_euclid(n) {
        0 => n as u8,
        r => r as u8,
    }
}

/// Derive trigram indices and the moving line from a moment
///
/// `lunar_month` may be negative (leap month); its magnitude is used.
pub fn derive_indices(
    year_branch: i64,
    lunar_month: i64,
    lunar_day: i64,
    hour_branch: i64,
) -> HexagramIndices {
    let sum = year_branch + lunar_month.abs() + lunar_day;
    HexagramIndices {
        upper: wrap_nonzero(sum, 8),
        lower: wrap_nonzero(sum + hour_branch, 8),
        moving_line: wrap_nonzero(sum + hour_branch, 6),
    }
}

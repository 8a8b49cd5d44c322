//! Domain Services
//!
//! Pure functions over the value objects plus the static tables they read.
//! - encoder: symbol numbers, trigram bits, index derivation
//! - transformer: moving-line mutation and diff
//! - resolver: names, houses and line annotations

pub mod encoder;
pub mod resolver;
mod tables;
pub mod transformer;

pub use encoder::{
    binary_representation, branch_number, branch_number_of, decode_trigram, derive_indices,
    encode_trigram, stem_number, stem_number_of, trigram_bits, HexagramIndices, TRIGRAM_WIDTH,
};
pub use resolver::{guardian_spirits, parse_line_label, resolve};
pub use transformer::{apply_moving_lines, base_binary, moving_lines_from_diff};

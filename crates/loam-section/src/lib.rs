//! Bit-packed block storage for one 16x16x16 chunk section.
#![forbid(unsafe_code)]

mod packed;
mod section;

pub use packed::{pack, unpack};
pub use section::Section;

use thiserror::Error;

/// The number of blocks wide a section is (x axis).
pub const SECTION_WIDTH: usize = 16;
/// The number of blocks tall a section is (y axis).
pub const SECTION_HEIGHT: usize = 16;
/// The number of blocks deep a section is (z axis).
pub const SECTION_DEPTH: usize = 16;
/// The number of blocks in a section.
pub const SECTION_BLOCKS: usize = SECTION_WIDTH * SECTION_HEIGHT * SECTION_DEPTH;

/// The narrowest palette index width the codec accepts.
pub const MIN_BITS_PER_BLOCK: usize = 1;
/// The widest palette index width the codec accepts.
pub const MAX_BITS_PER_BLOCK: usize = 16;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SectionError {
    #[error("bits per block {0} outside supported range 1..=16")]
    InvalidBitWidth(usize),
    #[error("packed buffer holds {got} words but {needed} are required at {bits_per_block} bits per block")]
    OutOfBounds {
        got: usize,
        needed: usize,
        bits_per_block: usize,
    },
    #[error("value {value} at index {index} does not fit in {bits_per_block} bits")]
    ValueTooWide {
        index: usize,
        value: u16,
        bits_per_block: usize,
    },
}

//! Codec for the padded packed-long representation of section block data.
//!
//! Each 64-bit word holds `64 / bits_per_block` entries in its low bits,
//! low-to-high; an entry never straddles two words, so any leftover high
//! bits are padding. Entries follow the flat index order
//! `(y * 16 + z) * 16 + x`, the same convention `loam-chunk` indexes with.

use crate::{MAX_BITS_PER_BLOCK, MIN_BITS_PER_BLOCK, SECTION_BLOCKS, SectionError};

#[inline]
fn check_bit_width(bits_per_block: usize) -> Result<(), SectionError> {
    if (MIN_BITS_PER_BLOCK..=MAX_BITS_PER_BLOCK).contains(&bits_per_block) {
        Ok(())
    } else {
        Err(SectionError::InvalidBitWidth(bits_per_block))
    }
}

/// Decodes a packed word buffer into `out`, one palette index per block.
///
/// Fails with `OutOfBounds` when `words` is too short to cover all 4096
/// entries at the given width, rather than reading past the end.
pub fn unpack(
    words: &[u64],
    bits_per_block: usize,
    out: &mut [u16; SECTION_BLOCKS],
) -> Result<(), SectionError> {
    check_bit_width(bits_per_block)?;
    let blocks_per_word = u64::BITS as usize / bits_per_block;
    let needed = SECTION_BLOCKS.div_ceil(blocks_per_word);
    if words.len() < needed {
        return Err(SectionError::OutOfBounds {
            got: words.len(),
            needed,
            bits_per_block,
        });
    }
    // Computed in 64 bits so a width of 16 yields 0xFFFF rather than
    // wrapping to zero.
    let mask = (1u64 << bits_per_block) - 1;
    for (block_number, slot) in out.iter_mut().enumerate() {
        let word = words[block_number / blocks_per_word];
        let shift = (block_number % blocks_per_word) * bits_per_block;
        *slot = ((word >> shift) & mask) as u16;
    }
    Ok(())
}

/// Encodes 4096 palette indices into packed words, the inverse of [`unpack`].
///
/// Fails with `ValueTooWide` when any value needs more than
/// `bits_per_block` bits.
pub fn pack(
    values: &[u16; SECTION_BLOCKS],
    bits_per_block: usize,
) -> Result<Vec<u64>, SectionError> {
    check_bit_width(bits_per_block)?;
    let blocks_per_word = u64::BITS as usize / bits_per_block;
    let mask = (1u64 << bits_per_block) - 1;
    let mut words = vec![0u64; SECTION_BLOCKS.div_ceil(blocks_per_word)];
    for (block_number, &value) in values.iter().enumerate() {
        if u64::from(value) & !mask != 0 {
            return Err(SectionError::ValueTooWide {
                index: block_number,
                value,
                bits_per_block,
            });
        }
        let shift = (block_number % blocks_per_word) * bits_per_block;
        words[block_number / blocks_per_word] |= u64::from(value) << shift;
    }
    Ok(words)
}

use log::warn;

use crate::{SECTION_BLOCKS, SECTION_DEPTH, SECTION_HEIGHT, SECTION_WIDTH, SectionError, packed};

/// A decoded 16x16x16 section of a chunk: a flat block array plus a count
/// of non-air blocks. Index with [`Section::block_index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Block ids in `(y * 16 + z) * 16 + x` order, always 4096 long.
    pub blocks: Vec<u16>,
    /// The number of non-air blocks in the section.
    pub block_count: u32,
}

impl Section {
    /// Creates an all-air section.
    pub fn new() -> Self {
        Self {
            blocks: vec![0; SECTION_BLOCKS],
            block_count: 0,
        }
    }

    /// Decodes a packed word buffer into a section, mapping entries through
    /// `palette` when it is non-empty (indirect palette). A palette index
    /// out of range is recovered as air.
    ///
    /// `block_count` is the non-air count reported by the data source; it is
    /// carried, not recomputed.
    pub fn from_packed(
        words: &[u64],
        bits_per_block: usize,
        palette: &[u16],
        block_count: u32,
    ) -> Result<Self, SectionError> {
        let mut ids = [0u16; SECTION_BLOCKS];
        packed::unpack(words, bits_per_block, &mut ids)?;
        let blocks = if palette.is_empty() {
            ids.to_vec()
        } else {
            ids.iter()
                .map(|&id| match palette.get(usize::from(id)) {
                    Some(&state) => state,
                    None => {
                        warn!(
                            "palette index {} out of bounds for palette of length {}, defaulting to air",
                            id,
                            palette.len()
                        );
                        0
                    }
                })
                .collect()
        };
        Ok(Self {
            blocks,
            block_count,
        })
    }

    /// Flat index of the block at `(x, y, z)` relative to the section.
    #[inline]
    pub fn block_index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < SECTION_WIDTH && y < SECTION_HEIGHT && z < SECTION_DEPTH);
        (y * SECTION_DEPTH + z) * SECTION_WIDTH + x
    }

    /// Block id at `index`, or 0 (air) when the index is invalid.
    pub fn get(&self, index: usize) -> u16 {
        match self.blocks.get(index) {
            Some(&id) => id,
            None => {
                warn!("block read at invalid section index {index}, returning air");
                0
            }
        }
    }

    /// Block id at `(x, y, z)` relative to the section.
    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> u16 {
        self.get(Self::block_index(x, y, z))
    }

    /// Sets the block id at `index`, keeping `block_count` current. An
    /// invalid index is ignored.
    pub fn set(&mut self, index: usize, id: u16) {
        let Some(slot) = self.blocks.get_mut(index) else {
            warn!("block change at invalid section index {index} ignored");
            return;
        };
        if *slot == 0 && id != 0 {
            self.block_count += 1;
        } else if *slot != 0 && id == 0 {
            self.block_count -= 1;
        }
        *slot = id;
    }

    /// Sets the block id at `(x, y, z)` relative to the section.
    #[inline]
    pub fn set_local(&mut self, x: usize, y: usize, z: usize, id: u16) {
        self.set(Self::block_index(x, y, z), id);
    }

    /// Whether the section is all air.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_packed_applies_indirect_palette() {
        // 4 bits per block; entries 0..3 hold palette ids 0..3.
        let mut words = vec![0u64; SECTION_BLOCKS / 16];
        words[0] = 0x3210;
        let palette = [0u16, 33, 1048, 9];
        let section = Section::from_packed(&words, 4, &palette, 3).unwrap();
        assert_eq!(&section.blocks[..4], &[0, 33, 1048, 9]);
        assert_eq!(section.block_count, 3);
    }

    #[test]
    fn from_packed_recovers_palette_miss_as_air() {
        let mut words = vec![0u64; SECTION_BLOCKS / 16];
        words[0] = 0xF; // palette id 15, palette only holds 2 entries
        let section = Section::from_packed(&words, 4, &[0, 7], 1).unwrap();
        assert_eq!(section.blocks[0], 0);
    }

    #[test]
    fn from_packed_empty_palette_is_direct() {
        let mut words = vec![0u64; SECTION_BLOCKS / 4];
        words[0] = 0x0705;
        let section = Section::from_packed(&words, 16, &[], 2).unwrap();
        assert_eq!(section.blocks[0], 0x0705);
    }

    #[test]
    fn set_tracks_block_count() {
        let mut section = Section::new();
        assert!(section.is_empty());
        section.set_local(3, 5, 7, 42);
        section.set_local(3, 5, 7, 43); // overwrite, still one non-air block
        assert_eq!(section.block_count, 1);
        assert_eq!(section.get_local(3, 5, 7), 43);
        section.set_local(3, 5, 7, 0);
        assert!(section.is_empty());
    }

    #[test]
    fn block_index_matches_flat_ordering() {
        let mut flat = 0;
        for y in 0..SECTION_HEIGHT {
            for z in 0..SECTION_DEPTH {
                for x in 0..SECTION_WIDTH {
                    assert_eq!(Section::block_index(x, y, z), flat);
                    flat += 1;
                }
            }
        }
    }
}

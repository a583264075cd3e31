use log::warn;

use loam_section::{SECTION_BLOCKS, Section};

use crate::{BLOCKS_PER_CHUNK, CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_WIDTH, NUM_SECTIONS};

/// A 16x16x256 column of blocks stored as 16 stacked sections, low to high.
///
/// Block ids are whatever the caller's palette resolution produced; id 0 is
/// air. Neighbouring chunks are not held here, see
/// [`neighbouring_blocks`](crate::neighbouring_blocks).
#[derive(Clone, Debug)]
pub struct Chunk {
    pub sections: Vec<Section>,
}

impl Chunk {
    /// Creates an all-air chunk.
    pub fn new() -> Self {
        Self {
            sections: (0..NUM_SECTIONS).map(|_| Section::new()).collect(),
        }
    }

    /// Wraps decoded sections into a chunk, padding or truncating to
    /// exactly 16 sections.
    pub fn from_sections(mut sections: Vec<Section>) -> Self {
        if sections.len() != NUM_SECTIONS {
            warn!(
                "chunk built from {} sections, expected {NUM_SECTIONS}",
                sections.len()
            );
            sections.resize_with(NUM_SECTIONS, Section::new);
        }
        Self { sections }
    }

    /// Flat index of the block at `(x, y, z)` relative to the chunk.
    #[inline]
    pub fn block_index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < CHUNK_WIDTH && y < CHUNK_HEIGHT && z < CHUNK_DEPTH);
        (y * CHUNK_DEPTH + z) * CHUNK_WIDTH + x
    }

    /// Block id at a flat chunk index, or 0 (air) when out of range.
    pub fn get_block(&self, index: usize) -> u16 {
        if index >= BLOCKS_PER_CHUNK {
            warn!("block read at invalid chunk index {index}, returning air");
            return 0;
        }
        self.sections[index / SECTION_BLOCKS].get(index % SECTION_BLOCKS)
    }

    /// Block id at `(x, y, z)` relative to the chunk.
    #[inline]
    pub fn get_block_at(&self, x: usize, y: usize, z: usize) -> u16 {
        self.get_block(Self::block_index(x, y, z))
    }

    /// Sets the block id at a flat chunk index. An out-of-range index is
    /// ignored.
    pub fn set_block(&mut self, index: usize, id: u16) {
        if index >= BLOCKS_PER_CHUNK {
            warn!("block change at invalid chunk index {index} ignored");
            return;
        }
        self.sections[index / SECTION_BLOCKS].set(index % SECTION_BLOCKS, id);
    }

    /// Sets the block id at `(x, y, z)` relative to the chunk. A y outside
    /// the world's vertical bounds is ignored.
    pub fn set_block_at(&mut self, x: usize, y: usize, z: usize, id: u16) {
        if y >= CHUNK_HEIGHT || x >= CHUNK_WIDTH || z >= CHUNK_DEPTH {
            warn!("block change at ({x}, {y}, {z}) ignored");
            return;
        }
        self.set_block(Self::block_index(x, y, z), id);
    }

    /// Whether every section of the chunk is all air.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

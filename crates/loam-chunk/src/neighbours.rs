//! Face-adjacent neighbour lookup over flat chunk indices.
//!
//! Works purely on index arithmetic: a neighbour that falls outside the
//! chunk's x/z bounds is redirected to the matching edge of the adjacent
//! chunk, and a neighbour outside the vertical world bounds is absent.

use crate::{BLOCKS_PER_CHUNK, BLOCKS_PER_LAYER, CHUNK_WIDTH};
use crate::face::{ChunkRef, Face};

/// The block adjacent to one face of a queried block.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NeighbourBlock {
    pub chunk: ChunkRef,
    pub index: usize,
}

#[inline]
const fn block(chunk: ChunkRef, index: usize) -> Option<NeighbourBlock> {
    Some(NeighbourBlock { chunk, index })
}

/// The six per-face neighbours of a block. Only [`Face::Up`] and
/// [`Face::Down`] can be absent, at the world's vertical extremes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Neighbours([Option<NeighbourBlock>; 6]);

impl Neighbours {
    #[inline]
    pub fn get(&self, face: Face) -> Option<NeighbourBlock> {
        self.0[face.index()]
    }

    /// Iterates over the present neighbours with their faces.
    pub fn iter(&self) -> impl Iterator<Item = (Face, NeighbourBlock)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(move |face| self.get(face).map(|n| (face, n)))
    }
}

/// Computes the six face-adjacent neighbours of the block at `index`.
///
/// `index` is a flat chunk index, `(y * 16 + z) * 16 + x`. North is -z,
/// south is +z, east is +x, west is -x. Lateral neighbours always resolve
/// to some chunk; up/down are absent beyond the world ceiling and floor.
pub fn neighbouring_blocks(index: usize) -> Neighbours {
    debug_assert!(index < BLOCKS_PER_CHUNK, "block index {index} out of range");

    // Everything left of these bounds is x/z wrapping within one row/layer.
    let row_start = index / CHUNK_WIDTH * CHUNK_WIDTH;
    let layer_start = index / BLOCKS_PER_LAYER * BLOCKS_PER_LAYER;

    let west = if index > row_start {
        block(ChunkRef::Current, index - 1)
    } else {
        block(ChunkRef::West, index + CHUNK_WIDTH - 1)
    };

    let east = if index + 1 < row_start + CHUNK_WIDTH {
        block(ChunkRef::Current, index + 1)
    } else {
        block(ChunkRef::East, index + 1 - CHUNK_WIDTH)
    };

    let north = if index >= layer_start + CHUNK_WIDTH {
        block(ChunkRef::Current, index - CHUNK_WIDTH)
    } else {
        block(ChunkRef::North, index + BLOCKS_PER_LAYER - CHUNK_WIDTH)
    };

    let south = if index + CHUNK_WIDTH < layer_start + BLOCKS_PER_LAYER {
        block(ChunkRef::Current, index + CHUNK_WIDTH)
    } else {
        block(ChunkRef::South, index + CHUNK_WIDTH - BLOCKS_PER_LAYER)
    };

    let down = if index >= BLOCKS_PER_LAYER {
        block(ChunkRef::Current, index - BLOCKS_PER_LAYER)
    } else {
        None
    };

    // Strict bound: the top layer has no neighbour above.
    let up = if index + BLOCKS_PER_LAYER < BLOCKS_PER_CHUNK {
        block(ChunkRef::Current, index + BLOCKS_PER_LAYER)
    } else {
        None
    };

    let mut faces = [None; 6];
    faces[Face::Up.index()] = up;
    faces[Face::Down.index()] = down;
    faces[Face::North.index()] = north;
    faces[Face::South.index()] = south;
    faces[Face::East.index()] = east;
    faces[Face::West.index()] = west;
    Neighbours(faces)
}

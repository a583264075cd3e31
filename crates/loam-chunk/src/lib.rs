//! Chunk-column block indexing and cross-chunk neighbour lookup.
#![forbid(unsafe_code)]

mod chunk;
mod face;
mod neighbours;

pub use chunk::Chunk;
pub use face::{ChunkRef, Face};
pub use neighbours::{NeighbourBlock, Neighbours, neighbouring_blocks};

/// The width of a chunk in the x direction.
pub const CHUNK_WIDTH: usize = 16;
/// The width of a chunk in the z direction.
pub const CHUNK_DEPTH: usize = 16;
/// The height of a chunk in the y direction.
pub const CHUNK_HEIGHT: usize = 256;
/// The number of blocks in each one-block-tall layer of a chunk.
pub const BLOCKS_PER_LAYER: usize = CHUNK_WIDTH * CHUNK_DEPTH;
/// The total number of blocks per chunk.
pub const BLOCKS_PER_CHUNK: usize = CHUNK_HEIGHT * BLOCKS_PER_LAYER;
/// The number of sections stacked in a chunk, low to high.
pub const NUM_SECTIONS: usize = CHUNK_HEIGHT / loam_section::SECTION_HEIGHT;

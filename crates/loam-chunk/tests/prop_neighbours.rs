use loam_chunk::{
    BLOCKS_PER_CHUNK, BLOCKS_PER_LAYER, CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_WIDTH, Chunk, ChunkRef,
    Face, NeighbourBlock, neighbouring_blocks,
};
use proptest::prelude::*;

fn block_index() -> impl Strategy<Value = usize> {
    0usize..BLOCKS_PER_CHUNK
}

fn nb(chunk: ChunkRef, index: usize) -> Option<NeighbourBlock> {
    Some(NeighbourBlock { chunk, index })
}

proptest! {
    // the four lateral faces always resolve to some chunk, never absent
    #[test]
    fn lateral_faces_always_resolve(index in block_index()) {
        let n = neighbouring_blocks(index);
        for face in [Face::North, Face::South, Face::East, Face::West] {
            prop_assert!(n.get(face).is_some());
        }
    }

    // index arithmetic agrees with the (x, y, z) coordinate model
    #[test]
    fn matches_coordinate_model(index in block_index()) {
        let x = index % CHUNK_WIDTH;
        let z = index / CHUNK_WIDTH % CHUNK_DEPTH;
        let y = index / BLOCKS_PER_LAYER;
        prop_assert_eq!(Chunk::block_index(x, y, z), index);

        let n = neighbouring_blocks(index);

        let west = if x == 0 {
            nb(ChunkRef::West, Chunk::block_index(CHUNK_WIDTH - 1, y, z))
        } else {
            nb(ChunkRef::Current, Chunk::block_index(x - 1, y, z))
        };
        prop_assert_eq!(n.get(Face::West), west);

        let east = if x == CHUNK_WIDTH - 1 {
            nb(ChunkRef::East, Chunk::block_index(0, y, z))
        } else {
            nb(ChunkRef::Current, Chunk::block_index(x + 1, y, z))
        };
        prop_assert_eq!(n.get(Face::East), east);

        let north = if z == 0 {
            nb(ChunkRef::North, Chunk::block_index(x, y, CHUNK_DEPTH - 1))
        } else {
            nb(ChunkRef::Current, Chunk::block_index(x, y, z - 1))
        };
        prop_assert_eq!(n.get(Face::North), north);

        let south = if z == CHUNK_DEPTH - 1 {
            nb(ChunkRef::South, Chunk::block_index(x, y, 0))
        } else {
            nb(ChunkRef::Current, Chunk::block_index(x, y, z + 1))
        };
        prop_assert_eq!(n.get(Face::South), south);

        let down = if y == 0 {
            None
        } else {
            nb(ChunkRef::Current, Chunk::block_index(x, y - 1, z))
        };
        prop_assert_eq!(n.get(Face::Down), down);

        let up = if y == CHUNK_HEIGHT - 1 {
            None
        } else {
            nb(ChunkRef::Current, Chunk::block_index(x, y + 1, z))
        };
        prop_assert_eq!(n.get(Face::Up), up);
    }

    // stepping to an in-chunk neighbour and back returns to the start
    #[test]
    fn in_chunk_neighbours_are_symmetric(index in block_index()) {
        for (face, neighbour) in neighbouring_blocks(index).iter() {
            if neighbour.chunk == ChunkRef::Current {
                let back = neighbouring_blocks(neighbour.index).get(face.opposite());
                prop_assert_eq!(
                    back,
                    Some(NeighbourBlock { chunk: ChunkRef::Current, index })
                );
            }
        }
    }

    // every neighbour index is a valid block index in its chunk
    #[test]
    fn neighbour_indices_in_range(index in block_index()) {
        for (_, neighbour) in neighbouring_blocks(index).iter() {
            prop_assert!(neighbour.index < BLOCKS_PER_CHUNK);
        }
    }

    // chunk get/set round-trips through the section stack
    #[test]
    fn chunk_get_set_round_trip(index in block_index(), id in any::<u16>()) {
        let mut chunk = Chunk::new();
        chunk.set_block(index, id);
        prop_assert_eq!(chunk.get_block(index), id);
        prop_assert_eq!(chunk.is_empty(), id == 0);
    }
}

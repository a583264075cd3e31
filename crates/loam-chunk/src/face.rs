/// One of the six faces of a block.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Up = 0,
    Down = 1,
    North = 2,
    South = 3,
    East = 4,
    West = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::North,
        Face::South,
        Face::East,
        Face::West,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::North => Face::South,
            Face::South => Face::North,
            Face::East => Face::West,
            Face::West => Face::East,
        }
    }
}

/// Which chunk a neighbour block lives in, relative to the queried chunk.
///
/// A pure back-reference tag: resolving it to a loaded chunk is the
/// caller's job.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChunkRef {
    Current,
    North,
    South,
    East,
    West,
}

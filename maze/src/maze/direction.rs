use strum::Display;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Invalid, // No direction selected. Never a movement result.
}

// The order in which candidate directions are listed before each random pick. Changing it
// changes which maze a given seed produces.
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Invalid => Direction::Invalid,
        }
    }

    /// Column and row step, with rows growing southwards.
    pub fn delta(self) -> Option<(isize, isize)> {
        match self {
            Direction::North => Some((0, -1)),
            Direction::East => Some((1, 0)),
            Direction::South => Some((0, 1)),
            Direction::West => Some((-1, 0)),
            Direction::Invalid => None,
        }
    }

    pub fn is_cardinal(self) -> bool {
        self != Direction::Invalid
    }
}

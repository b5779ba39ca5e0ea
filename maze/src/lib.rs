pub mod config;
pub mod constants;
pub mod maze;

pub use maze::{CARDINALS, Cell, Direction, Grid, Maze, MazeError, Position, Trace, TraceEntry};

// Board size the viewer opens with.
pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;

// Widest board that still fits a terminal when drawn with `Maze::log_iterations`. The generator
// itself has no limit: it carves with an explicit stack.
pub const MAX_DIMENSION: usize = 200;

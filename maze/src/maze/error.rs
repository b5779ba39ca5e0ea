use std::fmt;

/// Contract violations in the core. None of these are expected at runtime; the generator
/// returns them instead of panicking so that callers and tests see them straight away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimension {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: isize,
        y: isize,
    },
    InvalidDirection,
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => {
                write!(f, "maze dimensions must be positive, got {}x{}", width, height)
            }
            MazeError::OutOfBounds { x, y } => {
                write!(f, "cell ({}, {}) is outside the grid", x, y)
            }
            MazeError::InvalidDirection => write!(f, "tried to carve in the invalid direction"),
            MazeError::StartOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "start cell ({}, {}) is outside a {}x{} grid",
                x, y, width, height
            ),
        }
    }
}

impl std::error::Error for MazeError {}

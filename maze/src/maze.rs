pub mod direction;
pub mod error;
pub mod grid;
pub mod maker;
pub mod trace;

use std::fmt;

use rand::Rng;

pub use direction::{CARDINALS, Direction};
pub use error::MazeError;
pub use grid::{Cell, Grid, Position};
use maker::{Backtrack, MazeMaker};
pub use trace::{Trace, TraceEntry};

/// A finished perfect maze together with how it was made. Renderers only read from it.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Position,
    pub trace: Trace,
    pub seed: u64, // Feed back into `generate` to get the same maze again.
}

impl Maze {
    /// A maze with a random seed and a random start cell.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::generate(width, height, None, None)
    }

    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        Self::generate(width, height, Some(seed), None)
    }

    /// Carves a `width` x `height` maze by recursive backtracking. Without a `seed` one is drawn
    /// from the thread RNG; without a `start` the start cell is picked by the seeded RNG.
    pub fn generate(
        width: usize,
        height: usize,
        seed: Option<u64>,
        start: Option<Position>,
    ) -> Result<Self, MazeError> {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut maker = MazeMaker::new(width, height, seed)?;

        let start = match start {
            Some(start) if maker.grid.contains(start) => start,
            Some(Position { x, y }) => {
                return Err(MazeError::StartOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
            None => maker.pick_start(),
        };

        maker.backtrack(start)?;

        Ok(Maze {
            grid: maker.grid,
            start,
            trace: maker.trace,
            seed,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, MazeError> {
        self.grid.cell_at(Position::new(x, y))
    }

    pub fn dead_ends(&self) -> impl Iterator<Item = &Cell> {
        self.grid.cells().iter().filter(|cell| cell.is_dead_end)
    }

    /// Number of walls that were knocked down.
    pub fn passage_count(&self) -> usize {
        self.grid
            .cells()
            .iter()
            .map(|cell| cell.open_sides())
            .sum::<usize>()
            / 2
    }

    pub fn log(&self) -> String {
        self.render(3, |cell| {
            if cell.position == self.start {
                "S".to_string()
            } else {
                String::new()
            }
        })
    }

    /// Like `log`, but every cell shows the order in which it was first visited, followed by
    /// `S` for the start cell or `*` for a dead end.
    pub fn log_iterations(&self) -> String {
        let digits = self.grid.len().to_string().len();
        self.render(digits + 2, |cell| {
            let marker = if cell.position == self.start {
                "S"
            } else if cell.is_dead_end {
                "*"
            } else {
                " "
            };
            format!("{:>digits$}{}", cell.iteration_index, marker)
        })
    }

    fn render(&self, cell_width: usize, label: impl Fn(&Cell) -> String) -> String {
        let wall = "-".repeat(cell_width);
        let gap = " ".repeat(cell_width);
        let mut lines = Vec::with_capacity(2 * self.height() + 1);

        for row in self.grid.rows() {
            let mut top = String::new();
            let mut middle = String::new();

            for cell in row {
                top.push('+');
                top.push_str(if cell.wall_north { wall.as_str() } else { gap.as_str() });
                middle.push(if cell.wall_west { '|' } else { ' ' });
                middle.push_str(&format!("{:^cell_width$}", label(cell)));
            }

            top.push('+');
            if let Some(last) = row.last() {
                middle.push(if last.wall_east { '|' } else { ' ' });
            }

            lines.push(top);
            lines.push(middle);
        }

        if let Some(bottom_row) = self.grid.rows().last() {
            let mut bottom = String::new();
            for cell in bottom_row {
                bottom.push('+');
                bottom.push_str(if cell.wall_south { wall.as_str() } else { gap.as_str() });
            }
            bottom.push('+');
            lines.push(bottom);
        }

        lines.join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

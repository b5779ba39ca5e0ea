use super::{Direction, Grid, MazeError, Position};

/// One carve decision: the wall on `position`'s `direction` side was removed. `sequence` is the
/// number of cells visited when the wall came down, so entry `k` (0-based) has sequence `k + 1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TraceEntry {
    pub position: Position,
    pub direction: Direction,
    pub sequence: usize,
}

/// Carve decisions of a single generation run, in the order they were made.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    pub fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// Rebuilds the walls of a `width` x `height` maze by applying each entry in order to a
    /// fresh grid. Only walls are restored; visit bookkeeping stays at its initial values.
    pub fn replay(&self, width: usize, height: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(width, height)?;
        for entry in &self.entries {
            grid.remove_wall(entry.position, entry.direction)?;
        }
        Ok(grid)
    }

    pub fn log(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:>4}: ({}, {}) {}",
                    entry.sequence, entry.position.x, entry.position.y, entry.direction
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

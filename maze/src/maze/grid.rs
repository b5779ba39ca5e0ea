use disjoint::DisjointSet;

use super::{Direction, MazeError, direction::CARDINALS};

/// A cell coordinate: `x` is the column, `y` is the row, and row 0 is the northern edge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Returns the adjacent position, leaving `self` untouched. `None` if the step would take a
    /// coordinate below zero or `direction` is `Invalid`; the upper edges are the grid's concern.
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta()?;
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub wall_north: bool,
    pub wall_east: bool,
    pub wall_south: bool,
    pub wall_west: bool,
    pub visited: bool,
    pub visit_count: u32,
    pub is_dead_end: bool,
    pub iteration_index: usize, // 1-based order of first visit; 0 until visited.
}

impl Cell {
    fn new(position: Position) -> Self {
        Cell {
            position,
            wall_north: true,
            wall_east: true,
            wall_south: true,
            wall_west: true,
            visited: false,
            visit_count: 0,
            is_dead_end: false,
            iteration_index: 0,
        }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.wall_north,
            Direction::East => self.wall_east,
            Direction::South => self.wall_south,
            Direction::West => self.wall_west,
            Direction::Invalid => true,
        }
    }

    fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.wall_north = false,
            Direction::East => self.wall_east = false,
            Direction::South => self.wall_south = false,
            Direction::West => self.wall_west = false,
            Direction::Invalid => {}
        }
    }

    pub fn open_sides(&self) -> usize {
        CARDINALS
            .iter()
            .filter(|&&direction| !self.has_wall(direction))
            .count()
    }
}

/// Row-major cell storage: the cell at `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(MazeError::InvalidDimension { width, height })?;

        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Position { x, y }));
            }
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn index_of(&self, position: Position) -> Result<usize, MazeError> {
        if !self.contains(position) {
            return Err(MazeError::OutOfBounds {
                x: position.x as isize,
                y: position.y as isize,
            });
        }
        Ok(position.y * self.width + position.x)
    }

    pub fn cell_at(&self, position: Position) -> Result<&Cell, MazeError> {
        let i = self.index_of(position)?;
        Ok(&self.cells[i])
    }

    pub fn cell_at_mut(&mut self, position: Position) -> Result<&mut Cell, MazeError> {
        let i = self.index_of(position)?;
        Ok(&mut self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// The in-bounds neighbor of `position` in `direction`, if there is one.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .offset(direction)
            .filter(|&neighbor| self.contains(neighbor))
    }

    pub fn has_wall(&self, position: Position, direction: Direction) -> Result<bool, MazeError> {
        Ok(self.cell_at(position)?.has_wall(direction))
    }

    /// Opens the passage between `position` and its neighbor in `direction`. Both facing walls
    /// are cleared together so the two sides always agree.
    pub fn remove_wall(&mut self, position: Position, direction: Direction) -> Result<(), MazeError> {
        if !direction.is_cardinal() {
            return Err(MazeError::InvalidDirection);
        }
        let (dx, dy) = direction.delta().ok_or(MazeError::InvalidDirection)?;
        let here = self.index_of(position)?;
        let neighbor = self
            .neighbor(position, direction)
            .ok_or(MazeError::OutOfBounds {
                x: position.x as isize + dx,
                y: position.y as isize + dy,
            })?;
        let there = self.index_of(neighbor)?;

        self.cells[here].open(direction);
        self.cells[there].open(direction.opposite());
        Ok(())
    }

    /// True when every shared wall reads the same from both sides and the outer boundary is
    /// closed.
    pub fn walls_are_consistent(&self) -> bool {
        self.positions().all(|position| {
            CARDINALS.iter().all(|&direction| {
                let here = self.cells[position.y * self.width + position.x].has_wall(direction);
                match self.neighbor(position, direction) {
                    Some(neighbor) => {
                        let there = self.cells[neighbor.y * self.width + neighbor.x]
                            .has_wall(direction.opposite());
                        here == there
                    }
                    None => here,
                }
            })
        })
    }

    /// True when the open passages form a spanning tree of the grid: no cycles and exactly
    /// `len() - 1` passages, hence one path between any two cells.
    pub fn is_perfect(&self) -> bool {
        if !self.walls_are_consistent() {
            return false;
        }

        let mut sets = DisjointSet::with_len(self.cells.len());
        let mut passages = 0;

        for position in self.positions() {
            let i = position.y * self.width + position.x;
            for direction in [Direction::East, Direction::South] {
                if self.cells[i].has_wall(direction) {
                    continue;
                }
                let Some(neighbor) = self.neighbor(position, direction) else {
                    return false;
                };
                let j = neighbor.y * self.width + neighbor.x;
                if sets.root_of(i) == sets.root_of(j) {
                    return false;
                }
                sets.join(i, j);
                passages += 1;
            }
        }

        passages + 1 == self.cells.len()
    }
}

pub mod backtrack;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Direction, Grid, MazeError, Position, Trace, direction::CARDINALS};

pub use backtrack::Backtrack;

/// Generation state for one run. A fresh maker (new grid, empty trace, newly seeded RNG) is
/// built for every run, so nothing leaks from one maze into the next.
pub struct MazeMaker {
    pub grid: Grid,
    pub trace: Trace,
    pub rng: StdRng,
    iteration_count: usize,
}

impl MazeMaker {
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        let grid = Grid::new(width, height)?;

        Ok(MazeMaker {
            grid,
            trace: Trace::new(),
            rng: StdRng::seed_from_u64(seed),
            iteration_count: 0,
        })
    }

    pub fn pick_start(&mut self) -> Position {
        let x = self.rng.random_range(0..self.grid.width());
        let y = self.rng.random_range(0..self.grid.height());
        Position::new(x, y)
    }

    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    /// Marks `position` visited and returns the directions it can still be carved in. A cell
    /// that has none on arrival is flagged as a dead end.
    fn visit_cell(&mut self, position: Position) -> Result<Vec<Direction>, MazeError> {
        let cell = self.grid.cell_at_mut(position)?;
        cell.visited = true;
        cell.visit_count += 1;
        if cell.iteration_index == 0 {
            self.iteration_count += 1;
            cell.iteration_index = self.iteration_count;
        }

        let mut directions = CARDINALS.to_vec();
        retain_valid_directions(&self.grid, position, &mut directions);

        if directions.is_empty() {
            self.grid.cell_at_mut(position)?.is_dead_end = true;
        }

        Ok(directions)
    }
}

/// A direction is valid if it leads to an in-bounds neighbor that hasn't been visited yet.
fn is_valid_direction(grid: &Grid, position: Position, direction: Direction) -> bool {
    grid.neighbor(position, direction)
        .is_some_and(|neighbor| grid.cell_at(neighbor).is_ok_and(|cell| !cell.visited))
}

fn retain_valid_directions(grid: &Grid, position: Position, directions: &mut Vec<Direction>) {
    directions.retain(|&direction| is_valid_direction(grid, position, direction));
}

/// Removes and returns one direction, chosen uniformly. The RNG is only consulted when there is
/// a real choice to make. Returns `Invalid` for an empty list.
fn take_direction(rng: &mut StdRng, directions: &mut Vec<Direction>) -> Direction {
    let i = match directions.len() {
        0 => return Direction::Invalid,
        1 => 0,
        n => rng.random_range(0..n),
    };
    directions.remove(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_cell_numbers_first_visits_only() {
        let mut maker = MazeMaker::new(2, 1, 7).unwrap();
        maker.visit_cell(Position::new(0, 0)).unwrap();
        maker.visit_cell(Position::new(0, 0)).unwrap();

        let cell = maker.grid.cell_at(Position::new(0, 0)).unwrap();
        assert!(cell.visited);
        assert_eq!(cell.visit_count, 2);
        assert_eq!(cell.iteration_index, 1);
        assert_eq!(maker.iteration_count(), 1);
    }

    #[test]
    fn directions_exclude_edges_and_visited_neighbors() {
        let mut maker = MazeMaker::new(3, 3, 7).unwrap();
        maker.visit_cell(Position::new(1, 0)).unwrap();

        let directions = maker.visit_cell(Position::new(1, 1)).unwrap();
        assert_eq!(
            directions,
            vec![Direction::East, Direction::South, Direction::West]
        );

        let corner = maker.visit_cell(Position::new(0, 0)).unwrap();
        assert_eq!(corner, vec![Direction::South]);
    }

    #[test]
    fn cell_with_no_way_forward_is_a_dead_end() {
        let mut maker = MazeMaker::new(2, 1, 7).unwrap();
        let directions = maker.visit_cell(Position::new(0, 0)).unwrap();
        assert_eq!(directions, vec![Direction::East]);
        assert!(!maker.grid.cell_at(Position::new(0, 0)).unwrap().is_dead_end);

        let directions = maker.visit_cell(Position::new(1, 0)).unwrap();
        assert!(directions.is_empty());
        assert!(maker.grid.cell_at(Position::new(1, 0)).unwrap().is_dead_end);
    }

    #[test]
    fn take_direction_empties_the_list_without_repeats() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut directions = CARDINALS.to_vec();
        let mut taken = Vec::new();
        while !directions.is_empty() {
            taken.push(take_direction(&mut rng, &mut directions));
        }
        assert_eq!(taken.len(), 4);
        for direction in CARDINALS {
            assert!(taken.contains(&direction));
        }
        assert_eq!(take_direction(&mut rng, &mut directions), Direction::Invalid);
    }

    #[test]
    fn single_choice_does_not_touch_the_rng() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut untouched = StdRng::seed_from_u64(11);
        let mut directions = vec![Direction::South];
        assert_eq!(take_direction(&mut rng, &mut directions), Direction::South);
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn pick_start_is_inside_the_grid() {
        for seed in 0..32 {
            let mut maker = MazeMaker::new(3, 5, seed).unwrap();
            let start = maker.pick_start();
            assert!(maker.grid.contains(start));
        }
    }
}

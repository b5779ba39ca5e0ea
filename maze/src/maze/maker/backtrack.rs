use super::super::{Direction, MazeError, Position, TraceEntry};
use super::{MazeMaker, retain_valid_directions, take_direction};

/// A cell on the backtracking path together with the directions it has left to try.
struct Frame {
    position: Position,
    directions: Vec<Direction>,
}

pub trait Backtrack {
    fn backtrack(&mut self, start: Position) -> Result<(), MazeError>;
}

impl Backtrack for MazeMaker {
    /// Depth-first carve from `start`. The path is kept on an explicit stack, so the depth of
    /// the maze is bounded by memory rather than by the call stack; frames are processed in the
    /// same order, and draw from the RNG in the same order, as the recursive formulation.
    fn backtrack(&mut self, start: Position) -> Result<(), MazeError> {
        let directions = self.visit_cell(start)?;
        let mut stack = vec![Frame {
            position: start,
            directions,
        }];

        while let Some(frame) = stack.last_mut() {
            let position = frame.position;

            // Cells carved into further down the path are no longer candidates here.
            retain_valid_directions(&self.grid, position, &mut frame.directions);
            if frame.directions.is_empty() {
                stack.pop();
                continue;
            }

            let direction = take_direction(&mut self.rng, &mut frame.directions);
            self.grid.remove_wall(position, direction)?;
            self.trace.push(TraceEntry {
                position,
                direction,
                sequence: self.iteration_count,
            });

            let next = self
                .grid
                .neighbor(position, direction)
                .ok_or(MazeError::OutOfBounds {
                    x: position.x as isize,
                    y: position.y as isize,
                })?;
            let directions = self.visit_cell(next)?;
            stack.push(Frame {
                position: next,
                directions,
            });
        }

        Ok(())
    }
}

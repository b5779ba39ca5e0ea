pub mod run;
pub mod ui;

use maze::config::Config;
use maze::constants::MAX_DIMENSION;
use maze::{Maze, MazeError};

pub const HELP: &str = "r: new maze  n: toggle numbers  +/-: resize  q: quit";

/// What the viewer is showing, plus the settings for the next run. The maze is only ever
/// replaced wholesale, between frames.
pub struct Session {
    pub config: Config,
    pub maze: Maze,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, MazeError> {
        let maze = Maze::generate(config.width, config.height, config.seed, None)?;
        Ok(Session { config, maze })
    }

    /// A fresh maze of the configured size, from a new random seed.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        self.maze = Maze::new(self.config.width, self.config.height)?;
        Ok(())
    }

    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), MazeError> {
        self.config.width = width.clamp(1, MAX_DIMENSION);
        self.config.height = height.clamp(1, MAX_DIMENSION);
        self.regenerate()
    }

    /// Applies a key press. Returns `false` once the user asked to quit.
    pub fn handle_key(&mut self, key: char) -> Result<bool, MazeError> {
        match key {
            'r' | 'R' | ' ' => self.regenerate()?,
            'n' | 'N' => self.config.show_iterations = !self.config.show_iterations,
            '+' | '=' => self.resize(self.config.width + 1, self.config.height + 1)?,
            '-' | '_' => self.resize(
                self.config.width.saturating_sub(1),
                self.config.height.saturating_sub(1),
            )?,
            'q' | 'Q' => return Ok(false),
            _ => {}
        }
        Ok(true)
    }

    pub fn summary(&self) -> String {
        let maze = &self.maze;
        format!(
            "{}x{} maze, seed {}, start ({}, {}), {} dead ends",
            maze.width(),
            maze.height(),
            maze.seed,
            maze.start.x,
            maze.start.y,
            maze.dead_ends().count()
        )
    }

    pub fn body(&self) -> String {
        if self.config.show_iterations {
            self.maze.log_iterations()
        } else {
            self.maze.log()
        }
    }

    pub fn render(&self) -> String {
        format!("{}\n{}\n{}", self.summary(), self.body(), HELP)
    }
}

pub mod config;
pub mod direction;
pub mod game;
pub mod grid;

pub use config::{GameConfig, MAX_GRID_HEIGHT, MAX_GRID_WIDTH};
pub use direction::Direction;
pub use game::{Game, GameOverReason, GameStatus};
pub use grid::{BoardCache, Cell, Grid};

pub use snake_engine::{Direction, Game, GameConfig, GameOverReason, GameStatus};

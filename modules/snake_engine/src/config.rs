use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

pub const MAX_GRID_WIDTH: i32 = 256;
pub const MAX_GRID_HEIGHT: i32 = 256;

/// 对局参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_length: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            grid_height: 24,
            initial_length: 6,
            seed: 7,
        }
    }
}

impl GameConfig {
    /// 初始蛇以网格中心为头向左展开，必须整条落在网格内，且至少留出一个放苹果的空格
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be non-empty, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= MAX_GRID_WIDTH && self.grid_height <= MAX_GRID_HEIGHT,
            "grid {}x{} exceeds the {}x{} maximum",
            self.grid_width,
            self.grid_height,
            MAX_GRID_WIDTH,
            MAX_GRID_HEIGHT
        );
        ensure!(self.initial_length > 0, "initial snake length must be at least 1");

        let head_x = (self.grid_width / 2) as usize;
        ensure!(
            self.initial_length <= head_x + 1,
            "initial snake of length {} does not fit a grid {} cells wide",
            self.initial_length,
            self.grid_width
        );

        let capacity = (self.grid_width as usize) * (self.grid_height as usize);
        ensure!(
            self.initial_length < capacity,
            "grid {}x{} leaves no room for an apple",
            self.grid_width,
            self.grid_height
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_snake_wider_than_half_grid() {
        let config = GameConfig {
            grid_width: 8,
            initial_length: 6,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("does not fit"));

        let config = GameConfig {
            grid_width: 10,
            initial_length: 6,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_grids() {
        let huge = GameConfig {
            grid_width: 2_000_000,
            grid_height: 2_000_000,
            ..GameConfig::default()
        };
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let too_tall = GameConfig {
            grid_height: MAX_GRID_HEIGHT + 1,
            ..GameConfig::default()
        };
        assert!(too_tall.validate().is_err());

        let largest = GameConfig {
            grid_width: MAX_GRID_WIDTH,
            grid_height: MAX_GRID_HEIGHT,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_grids() {
        let empty = GameConfig {
            grid_width: 0,
            ..GameConfig::default()
        };
        assert!(empty.validate().is_err());

        let no_room = GameConfig {
            grid_width: 2,
            grid_height: 1,
            initial_length: 2,
            seed: 0,
        };
        assert!(no_room.validate().is_err());

        let zero_len = GameConfig {
            initial_length: 0,
            ..GameConfig::default()
        };
        assert!(zero_len.validate().is_err());
    }
}

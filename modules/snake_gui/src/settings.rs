use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::GameConfig;

/// 指向 JSON 配置文件的环境变量
pub const CONFIG_ENV: &str = "SNAKE_CONFIG";

pub const DEFAULT_TICK_MS: u64 = 180;
pub const DEFAULT_UNIT_SIZE: f32 = 25.0;
pub const MIN_UNIT_SIZE: f32 = 8.0;
pub const MAX_UNIT_SIZE: f32 = 64.0;
/// 棋盘单边像素上限
pub const MAX_BOARD_SIDE: f32 = 4096.0;

/// 启动参数：节拍、格子像素尺寸与对局规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub tick_ms: u64,
    pub unit_size: f32,
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_length: usize,
    /// 缺省时用时钟生成
    pub seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            tick_ms: DEFAULT_TICK_MS,
            unit_size: DEFAULT_UNIT_SIZE,
            grid_width: game.grid_width,
            grid_height: game.grid_height,
            initial_length: game.initial_length,
            seed: None,
        }
    }
}

impl AppSettings {
    /// 若设置了 `SNAKE_CONFIG` 则读取该文件，否则使用默认值
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw).context("malformed settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_ms > 0, "tick_ms must be positive");
        ensure!(
            (MIN_UNIT_SIZE..=MAX_UNIT_SIZE).contains(&self.unit_size),
            "unit_size {} outside {}..={}",
            self.unit_size,
            MIN_UNIT_SIZE,
            MAX_UNIT_SIZE
        );
        self.game_config().validate()?;
        let board_w = self.grid_width as f32 * self.unit_size;
        let board_h = self.grid_height as f32 * self.unit_size;
        ensure!(
            board_w <= MAX_BOARD_SIDE && board_h <= MAX_BOARD_SIDE,
            "board of {}x{} px exceeds {} px per side",
            board_w,
            board_h,
            MAX_BOARD_SIDE
        );
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            initial_length: self.initial_length,
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }

    /// 每步间隔（秒）
    pub fn tick_interval(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

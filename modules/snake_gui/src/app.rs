use anyhow::Result;
use macroquad::prelude::*;

use crate::domain::Game;
use crate::input::{Action, InputHandler};
use crate::settings::AppSettings;
use crate::ui::{BoardLayout, HudLayout, Renderer};

/// 固定步长计时器：累积帧间隔，每满一个 interval 产出一步
#[derive(Debug, Clone)]
pub struct StepTimer {
    interval: f32,
    accumulator: f32,
}

impl StepTimer {
    /// 卡顿后单帧最多补的步数，超出的积压直接丢弃
    const MAX_STEPS_PER_FRAME: u32 = 4;

    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.interval && steps < Self::MAX_STEPS_PER_FRAME {
            self.accumulator -= self.interval;
            steps += 1;
        }
        if steps == Self::MAX_STEPS_PER_FRAME {
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// 应用层：编排游戏逻辑、输入与渲染
pub struct App {
    game: Game,
    paused: bool,
    timer: StepTimer,
    board: BoardLayout,
    hud: HudLayout,
}

impl App {
    pub fn new(settings: &AppSettings) -> Result<Self> {
        let game = Game::new(settings.game_config())?;
        let board = BoardLayout::new(settings.unit_size, game.grid_width(), game.grid_height());
        let hud = HudLayout::below(&board);
        Ok(Self {
            game,
            paused: false,
            timer: StepTimer::new(settings.tick_interval()),
            board,
            hud,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// 每帧调用：处理输入 → 更新逻辑 → 渲染
    pub fn tick(&mut self) {
        let dt = get_frame_time();
        for action in InputHandler::poll() {
            self.apply(action);
        }
        self.update(dt);
        Renderer::draw_frame(&self.board, &self.hud, self.game(), self.is_paused());
    }

    // ─────────────────────────────────────────────────────
    // 输入处理
    // ─────────────────────────────────────────────────────
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move(dir) => {
                if self.game.is_running() {
                    self.game.set_direction(dir);
                }
            }
            Action::TogglePause => {
                if self.game.is_running() {
                    self.paused = !self.paused;
                    log::info!("{}", if self.paused { "paused" } else { "resumed" });
                }
            }
            Action::Restart => {
                if !self.game.is_running() {
                    self.game.restart();
                    self.paused = false;
                    self.timer.reset();
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────
    // 逻辑更新
    // ─────────────────────────────────────────────────────
    pub fn update(&mut self, dt: f32) {
        if !self.game.is_running() || self.paused {
            return;
        }

        for _ in 0..self.timer.advance(dt) {
            self.game.step();
            if !self.game.is_running() {
                self.timer.reset();
                break;
            }
        }
    }
}

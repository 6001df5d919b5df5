use macroquad::prelude::*;
use super::layout::{status_label, BoardLayout, HudLayout};
use crate::domain::{Game, GameOverReason, GameStatus};

/// 渲染上下文，负责所有绘制操作
pub struct Renderer;

impl Renderer {
    // ─────────────────────────────────────────────────────
    // 颜色常量
    // ─────────────────────────────────────────────────────
    const BG_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    const BOARD_BG: Color = Color::new(0.102, 0.118, 0.133, 1.0);           // 26,30,34
    const APPLE_COLOR: Color = Color::new(0.922, 0.224, 0.224, 1.0);        // 235,57,57
    const SNAKE_HEAD: Color = Color::new(0.0, 1.0, 0.0, 1.0);               // 0,255,0
    const SNAKE_BODY: Color = Color::new(0.176, 0.706, 0.0, 1.0);           // 45,180,0
    const SCORE_COLOR: Color = Color::new(0.922, 0.224, 0.224, 1.0);
    const HUD_BG: Color = Color::new(0.047, 0.055, 0.063, 1.0);             // 12,14,16
    const HUD_LINE: Color = Color::new(0.157, 0.173, 0.188, 1.0);           // 40,44,48
    const TEXT_FG: Color = Color::new(0.863, 0.863, 0.863, 1.0);            // 220,220,220
    const TEXT_MUTED: Color = Color::new(0.667, 0.667, 0.667, 1.0);         // 170,170,170
    const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.6);

    const SCORE_FONT: u16 = 40;
    const TITLE_FONT: u16 = 75;
    const PROMPT_FONT: u16 = 30;

    // ─────────────────────────────────────────────────────
    // 整体绘制入口
    // ─────────────────────────────────────────────────────
    pub fn draw_frame(board: &BoardLayout, hud: &HudLayout, game: &Game, paused: bool) {
        clear_background(Self::BG_COLOR);
        draw_rectangle(board.origin_x, board.origin_y, board.width, board.height, Self::BOARD_BG);

        // 苹果（胜利时棋盘已满，不画）
        if game.status() != GameStatus::Victory {
            let (cx, cy) = board.cell_center(game.apple());
            draw_circle(cx, cy, board.unit * 0.5, Self::APPLE_COLOR);
        }

        for (i, &cell) in game.snake().iter().enumerate() {
            let color = if i == 0 { Self::SNAKE_HEAD } else { Self::SNAKE_BODY };
            let (px, py, w, h) = board.cell_rect(cell);
            draw_rectangle(px, py, w, h, color);
        }

        Self::draw_hud(hud, game, paused);

        match game.status() {
            GameStatus::Running if paused => Self::draw_pause_overlay(board),
            GameStatus::Running => {
                let score = format!("Score: {}", game.score());
                let baseline = board.origin_y + Self::SCORE_FONT as f32;
                Self::draw_centered(&score, board, baseline, Self::SCORE_FONT, Self::SCORE_COLOR);
            }
            GameStatus::GameOver | GameStatus::Victory => Self::draw_game_over(board, game),
        }
    }

    // ─────────────────────────────────────────────────────
    // 结束画面
    // ─────────────────────────────────────────────────────
    fn draw_game_over(board: &BoardLayout, game: &Game) {
        draw_rectangle(board.origin_x, board.origin_y, board.width, board.height, Self::OVERLAY_DIM);

        let mid = board.origin_y + board.height * 0.5;
        let title = if game.status() == GameStatus::Victory { "You Win" } else { "Game Over" };
        Self::draw_centered(title, board, mid, Self::TITLE_FONT, Self::SCORE_COLOR);

        let score = format!("Score: {}", game.score());
        Self::draw_centered(&score, board, mid + 50.0, Self::SCORE_FONT, Self::SCORE_COLOR);

        if let Some(reason) = game.game_over_reason() {
            Self::draw_centered(reason_text(reason), board, mid + 80.0, 20, Self::TEXT_MUTED);
        }

        Self::draw_centered("Press ENTER to Restart", board, mid + 120.0, Self::PROMPT_FONT, Self::TEXT_FG);
    }

    fn draw_pause_overlay(board: &BoardLayout) {
        draw_rectangle(board.origin_x, board.origin_y, board.width, board.height, Self::OVERLAY_DIM);
        let mid = board.origin_y + board.height * 0.5;
        Self::draw_centered("Paused", board, mid, Self::SCORE_FONT, Self::TEXT_FG);
        Self::draw_centered("Press P to resume", board, mid + 40.0, 20, Self::TEXT_MUTED);
    }

    // ─────────────────────────────────────────────────────
    // 状态栏
    // ─────────────────────────────────────────────────────
    fn draw_hud(layout: &HudLayout, game: &Game, paused: bool) {
        draw_rectangle(layout.origin_x, layout.origin_y, layout.width, layout.height, Self::HUD_BG);
        draw_line(
            layout.origin_x,
            layout.origin_y,
            layout.origin_x + layout.width,
            layout.origin_y,
            2.0,
            Self::HUD_LINE,
        );

        let x = layout.origin_x + 12.0;
        let y = layout.origin_y + 24.0;

        let line1 = format!(
            "Score: {} | Len: {} | Grid: {}x{} | {}",
            game.score(),
            game.snake().len(),
            game.grid_width(),
            game.grid_height(),
            status_label(game.status(), paused),
        );
        draw_text(&line1, x, y, 18.0, Self::TEXT_FG);
        draw_text(
            "Arrows/WASD(move) | P(pause) | Enter(restart)",
            x,
            y + 22.0,
            16.0,
            Self::TEXT_MUTED,
        );
    }

    fn draw_centered(text: &str, board: &BoardLayout, baseline: f32, font_size: u16, color: Color) {
        let dims = measure_text(text, None, font_size, 1.0);
        let x = board.origin_x + (board.width - dims.width) * 0.5;
        draw_text(text, x, baseline, font_size as f32, color);
    }
}

fn reason_text(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::HitWall => "Hit the wall",
        GameOverReason::HitSelf => "Bit your own tail",
    }
}

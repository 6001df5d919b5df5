//! Snake GUI - 贪吃蛇图形界面
//!
//! 模块结构:
//! - domain: 规则引擎的再导出（不依赖 UI）
//! - ui: 布局计算与渲染
//! - input: 键盘事件翻译
//! - settings: 启动配置（可选 JSON 文件）
//! - app: 应用层编排

mod domain;
mod ui;
mod input;
mod settings;
mod app;

use anyhow::{Context, Result};
use macroquad::prelude::*;
use settings::AppSettings;
use ui::BoardLayout;

fn window_conf(settings: &AppSettings) -> Conf {
    let board = BoardLayout::new(settings.unit_size, settings.grid_width, settings.grid_height);
    let (width, height) = board.window_size();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(mut app: app::App) {
    loop {
        app.tick();
        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load().context("failed to load settings")?;
    log::info!(
        "starting {}x{} board, unit {}px, tick {}ms",
        settings.grid_width,
        settings.grid_height,
        settings.unit_size,
        settings.tick_ms
    );

    let app = app::App::new(&settings)?;
    macroquad::Window::from_config(window_conf(&settings), run(app));
    Ok(())
}

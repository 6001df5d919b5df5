use crate::domain::GameStatus;

pub const HUD_HEIGHT: f32 = 64.0;

/// 游戏棋盘布局信息，格子边长即 unit size
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
    pub unit: f32,
}

impl BoardLayout {
    pub fn new(unit: f32, grid_width: i32, grid_height: i32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width: grid_width as f32 * unit,
            height: grid_height as f32 * unit,
            unit,
        }
    }

    /// 单元格矩形，四周各留 1px 缝隙
    pub fn cell_rect(&self, cell: (i32, i32)) -> (f32, f32, f32, f32) {
        let (x, y) = cell;
        let px = self.origin_x + x as f32 * self.unit;
        let py = self.origin_y + y as f32 * self.unit;
        let side = (self.unit - 2.0).max(1.0);
        (px + 1.0, py + 1.0, side, side)
    }

    pub fn cell_center(&self, cell: (i32, i32)) -> (f32, f32) {
        let (x, y) = cell;
        (
            self.origin_x + (x as f32 + 0.5) * self.unit,
            self.origin_y + (y as f32 + 0.5) * self.unit,
        )
    }

    /// 含状态栏的整个窗口尺寸
    pub fn window_size(&self) -> (f32, f32) {
        (self.width, self.height + HUD_HEIGHT)
    }
}

/// 棋盘下方的状态栏
#[derive(Debug, Clone, PartialEq)]
pub struct HudLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl HudLayout {
    pub fn below(board: &BoardLayout) -> Self {
        Self {
            origin_x: board.origin_x,
            origin_y: board.origin_y + board.height,
            width: board.width,
            height: HUD_HEIGHT,
        }
    }
}

pub fn status_label(status: GameStatus, paused: bool) -> &'static str {
    match status {
        GameStatus::Running if paused => "Paused",
        GameStatus::Running => "Running",
        GameStatus::GameOver => "Game Over",
        GameStatus::Victory => "Victory",
    }
}

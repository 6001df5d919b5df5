use std::collections::VecDeque;

use anyhow::Result;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::grid::{BoardCache, Cell, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Running,
    GameOver,
    /// 蛇占满整个棋盘，再无空格放苹果
    Victory,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
}

/// 贪吃蛇核心规则引擎（不依赖任何 UI 库）
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: ChaCha8Rng,
    snake: VecDeque<Cell>,
    direction: Direction,
    input_queue: VecDeque<Direction>,
    apple: Cell,
    score: u32,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
    cache: BoardCache,
}

impl Game {
    const INPUT_QUEUE_CAPACITY: usize = 2;

    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);
        let mut game = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            snake: VecDeque::new(),
            direction: Direction::Right,
            input_queue: VecDeque::new(),
            apple: (0, 0),
            score: 0,
            status: GameStatus::Running,
            game_over_reason: None,
            cache: BoardCache::new(grid),
        };
        game.restart();
        Ok(game)
    }

    // ─────────────────────────────────────────────────────
    // 公共只读访问器
    // ─────────────────────────────────────────────────────
    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid_width(&self) -> i32 {
        self.cache.grid().width
    }

    pub fn grid_height(&self) -> i32 {
        self.cache.grid().height
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────
    // 方向输入：先入队，step 时每步最多消费一个
    // ─────────────────────────────────────────────────────
    pub fn set_direction(&mut self, next: Direction) {
        if !self.is_running() {
            return;
        }
        let last_effective = self.input_queue.back().copied().unwrap_or(self.direction);
        if next == last_effective || next.is_opposite(last_effective) {
            trace!("ignored direction {:?} (heading {:?})", next, last_effective);
            return;
        }
        if self.input_queue.len() >= Self::INPUT_QUEUE_CAPACITY {
            return;
        }
        self.input_queue.push_back(next);
    }

    // ─────────────────────────────────────────────────────
    // 重开
    // ─────────────────────────────────────────────────────
    pub fn restart(&mut self) {
        let (head_x, head_y) = self.cache.grid().center();
        self.snake.clear();
        for i in 0..self.config.initial_length as i32 {
            self.snake.push_back((head_x - i, head_y));
        }
        self.direction = Direction::Right;
        self.input_queue.clear();
        self.score = 0;
        self.status = GameStatus::Running;
        self.game_over_reason = None;
        self.cache.rebuild(self.snake.iter());
        self.spawn_apple();
        info!(
            "new game on {}x{} grid, snake length {}",
            self.grid_width(),
            self.grid_height(),
            self.snake.len()
        );
    }

    // ─────────────────────────────────────────────────────
    // 核心推进（一步）
    // ─────────────────────────────────────────────────────
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }

        self.apply_queued_direction();
        let (dx, dy) = self.direction.delta();
        let (head_x, head_y) = self.head();
        let new_head = (head_x + dx, head_y + dy);

        if !self.cache.grid().in_bounds(new_head) {
            self.end(GameOverReason::HitWall);
            return;
        }

        let will_grow = new_head == self.apple;
        // 不吃苹果时尾巴在本步让出格子，蛇头可以跟进
        let tail = self.snake.back().copied();
        let vacates_tail = !will_grow && tail == Some(new_head);
        if self.cache.is_occupied(new_head) && !vacates_tail {
            self.end(GameOverReason::HitSelf);
            return;
        }

        if !will_grow {
            if let Some(old_tail) = self.snake.pop_back() {
                self.cache.set_empty(old_tail);
            }
        }
        self.snake.push_front(new_head);
        self.cache.set_occupied(new_head);

        if will_grow {
            self.score += 1;
            debug!("apple eaten at {:?}, score {}", new_head, self.score);
            self.spawn_apple();
        }
    }

    // ─────────────────────────────────────────────────────
    // 测试辅助：直接摆放蛇和苹果
    // ─────────────────────────────────────────────────────
    #[doc(hidden)]
    pub fn debug_set_snake(&mut self, cells: &[Cell], direction: Direction) {
        self.snake = cells.iter().copied().collect();
        self.direction = direction;
        self.input_queue.clear();
        self.cache.rebuild(self.snake.iter());
    }

    #[doc(hidden)]
    pub fn debug_set_apple(&mut self, cell: Cell) {
        self.apple = cell;
    }

    // ─────────────────────────────────────────────────────
    // 私有辅助
    // ─────────────────────────────────────────────────────
    fn apply_queued_direction(&mut self) {
        if let Some(next) = self.input_queue.pop_front() {
            if !next.is_opposite(self.direction) {
                self.direction = next;
            }
        }
    }

    fn spawn_apple(&mut self) {
        match self.cache.random_free_cell(&mut self.rng) {
            Some(cell) => {
                self.apple = cell;
                debug!("apple spawned at {:?}", cell);
            }
            None => {
                self.status = GameStatus::Victory;
                info!("board filled, final score {}", self.score);
            }
        }
    }

    fn end(&mut self, reason: GameOverReason) {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        self.input_queue.clear();
        info!("game over ({:?}), score {}", reason, self.score);
    }
}

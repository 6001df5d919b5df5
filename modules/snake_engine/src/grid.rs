use rand::Rng;

/// 网格坐标 (x, y)，以格为单位
pub type Cell = (i32, i32);

const NOT_FREE: usize = usize::MAX;

/// 网格尺寸与坐标/索引互转
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 >= 0 && cell.0 < self.width && cell.1 >= 0 && cell.1 < self.height
    }

    /// 调用方保证 `cell` 在界内
    pub fn to_index(&self, cell: Cell) -> usize {
        let (x, y) = cell;
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn from_index(&self, idx: usize) -> Cell {
        let w = self.width as usize;
        ((idx % w) as i32, (idx / w) as i32)
    }
}

/// 棋盘占用状态缓存
///
/// `free_cells` 保存所有空闲格子的索引，`free_pos[idx]` 记录 `idx` 在其中的位置
/// （被占用时为 `NOT_FREE`），因此占用/释放与随机取空格都是 O(1)。
#[derive(Clone, Debug)]
pub struct BoardCache {
    grid: Grid,
    occupied: Vec<bool>,
    free_cells: Vec<usize>,
    free_pos: Vec<usize>,
}

impl BoardCache {
    pub fn new(grid: Grid) -> Self {
        let cell_count = grid.cell_count();
        Self {
            grid,
            occupied: vec![false; cell_count],
            free_cells: (0..cell_count).collect(),
            free_pos: (0..cell_count).collect(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// 按给定的蛇身重建占用表
    pub fn rebuild<'a>(&mut self, body: impl Iterator<Item = &'a Cell>) {
        let cell_count = self.grid.cell_count();
        self.occupied.clear();
        self.occupied.resize(cell_count, false);
        for &cell in body {
            if self.grid.in_bounds(cell) {
                let idx = self.grid.to_index(cell);
                self.occupied[idx] = true;
            }
        }

        self.free_cells.clear();
        self.free_pos.clear();
        self.free_pos.resize(cell_count, NOT_FREE);
        for idx in 0..cell_count {
            if !self.occupied[idx] {
                self.free_pos[idx] = self.free_cells.len();
                self.free_cells.push(idx);
            }
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.grid.in_bounds(cell) && self.occupied[self.grid.to_index(cell)]
    }

    pub fn set_occupied(&mut self, cell: Cell) {
        let idx = self.grid.to_index(cell);
        if self.occupied[idx] {
            return;
        }
        self.occupied[idx] = true;
        let pos = self.free_pos[idx];
        self.free_cells.swap_remove(pos);
        self.free_pos[idx] = NOT_FREE;
        // swap_remove 把末尾元素挪到了 pos
        if let Some(&moved) = self.free_cells.get(pos) {
            self.free_pos[moved] = pos;
        }
    }

    pub fn set_empty(&mut self, cell: Cell) {
        let idx = self.grid.to_index(cell);
        if !self.occupied[idx] {
            return;
        }
        self.occupied[idx] = false;
        self.free_pos[idx] = self.free_cells.len();
        self.free_cells.push(idx);
    }

    pub fn free_count(&self) -> usize {
        self.free_cells.len()
    }

    /// 均匀随机选取一个空闲格子；棋盘已满时返回 None
    pub fn random_free_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        if self.free_cells.is_empty() {
            return None;
        }
        let idx = self.free_cells[rng.gen_range(0..self.free_cells.len())];
        Some(self.grid.from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn index_conversion_is_consistent() {
        let grid = Grid::new(7, 5);
        for idx in 0..grid.cell_count() {
            assert_eq!(grid.to_index(grid.from_index(idx)), idx);
        }
        assert_eq!(grid.from_index(8), (1, 1));
        assert_eq!(grid.center(), (3, 2));
    }

    #[test]
    fn bounds_check_rejects_edges() {
        let grid = Grid::new(4, 3);
        assert!(grid.in_bounds((0, 0)));
        assert!(grid.in_bounds((3, 2)));
        assert!(!grid.in_bounds((-1, 0)));
        assert!(!grid.in_bounds((4, 0)));
        assert!(!grid.in_bounds((0, 3)));
    }

    #[test]
    fn occupancy_tracks_free_cells() {
        let mut cache = BoardCache::new(Grid::new(3, 3));
        assert_eq!(cache.free_count(), 9);

        cache.set_occupied((1, 1));
        cache.set_occupied((0, 0));
        cache.set_occupied((0, 0));
        assert_eq!(cache.free_count(), 7);
        assert!(cache.is_occupied((1, 1)));
        assert!(!cache.is_occupied((2, 2)));
        assert!(!cache.is_occupied((5, 5)));

        cache.set_empty((1, 1));
        cache.set_empty((1, 1));
        assert_eq!(cache.free_count(), 8);
        assert!(!cache.is_occupied((1, 1)));
    }

    #[test]
    fn random_free_cell_never_returns_occupied() {
        let mut cache = BoardCache::new(Grid::new(4, 4));
        let body = vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (2, 1)];
        cache.rebuild(body.iter());

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let cell = cache.random_free_cell(&mut rng).unwrap();
            assert!(!body.contains(&cell));
        }
    }

    #[test]
    fn full_board_has_no_free_cell() {
        let grid = Grid::new(2, 2);
        let body: Vec<Cell> = (0..4).map(|i| grid.from_index(i)).collect();
        let mut cache = BoardCache::new(grid);
        cache.rebuild(body.iter());

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(cache.random_free_cell(&mut rng), None);
    }
}

use super::{Coord, cell::Cell, offset};

/// Fixed-size rectangular array of cells, stored row-major.
///
/// Both dimensions are odd and within [`Grid::MIN_DIM`]..=[`Grid::MAX_DIM`], so
/// carving on the 2-step lattice from `(1, 1)` always leaves a one-cell wall border.
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Smallest adjusted dimension. Anything below this cannot hold the carve start `(1, 1)`.
    pub const MIN_DIM: usize = 3;
    /// Largest adjusted dimension. Keeps `rows * cols` far from overflow and the allocation sane.
    pub const MAX_DIM: usize = 4001;

    /// Creates a grid of walls. Even dimensions are bumped up to the next odd number,
    /// and anything past [`Grid::MAX_DIM`] is clamped to it.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = Self::adjust_dim(rows);
        let cols = Self::adjust_dim(cols);
        let data = vec![Cell::WALL; rows * cols].into_boxed_slice();
        Grid { data, rows, cols }
    }

    fn adjust_dim(dim: usize) -> usize {
        let dim = dim.clamp(Self::MIN_DIM, Self::MAX_DIM);
        if dim % 2 == 0 { dim + 1 } else { dim }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Turns every cell back into an unvisited wall.
    pub fn reset_all(&mut self) {
        self.data.fill(Cell::WALL);
    }

    /// Clears visited flags and predecessor links, leaving walls untouched.
    pub fn reset_traversal(&mut self) {
        self.data.iter_mut().for_each(Cell::clear_traversal);
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.in_bounds(coord.0, coord.1)
    }

    /// In-bounds, non-wall.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.contains(coord) && !self[coord].is_wall
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Coordinates of every non-wall cell, row by row.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(|&coord| !self[coord].is_wall)
    }

    /// In-bounds cells one step away in the four cardinal directions.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(move |delta| offset(coord, delta))
            .filter(move |&c| self.contains(c))
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

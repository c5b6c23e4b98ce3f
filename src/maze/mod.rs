pub mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// A `(row, col)` position in the grid, 0-indexed.
pub type Coord = (usize, usize);

/// An ordered run of coordinates from a start cell to an end cell.
pub type Path = Vec<Coord>;

/// Moves `coord` by `delta`. Stepping off the top or left edge wraps to a huge
/// index that fails every bounds check.
pub fn offset(coord: Coord, delta: (isize, isize)) -> Coord {
    (
        coord.0.wrapping_add_signed(delta.0),
        coord.1.wrapping_add_signed(delta.1),
    )
}

/// Whether two coordinates are one cardinal step apart.
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
}

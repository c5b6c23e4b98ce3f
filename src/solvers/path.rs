use crate::maze::{Coord, Grid, Path};

/// Follows predecessor links back from `end` and returns the route start-first.
///
/// The walk stops at the first cell without a predecessor, which is the
/// search's start cell. An absent or out-of-bounds `end` gives an empty path.
pub fn reconstruct_path(grid: &Grid, end: Option<Coord>) -> Path {
    let mut path = Vec::new();
    let mut current = end.filter(|&coord| grid.contains(coord));
    while let Some(coord) = current {
        path.push(coord);
        current = grid[coord].predecessor;
    }
    path.reverse();
    path
}

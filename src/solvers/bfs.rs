use std::collections::VecDeque;

use super::{SolveError, path::reconstruct_path};
use crate::maze::{Coord, Grid, Path, offset};

/// Expansion order: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn solve_bfs(grid: &mut Grid, start: Coord, end: Coord) -> Result<Path, SolveError> {
    let mut queue = VecDeque::from([start]);
    grid[start].visited = true;

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Ok(reconstruct_path(grid, Some(current)));
        }

        for delta in DIRECTIONS {
            let neighbor = offset(current, delta);
            if grid.contains(neighbor) && grid[neighbor].is_open_and_unvisited() {
                let cell = &mut grid[neighbor];
                cell.visited = true;
                cell.predecessor = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    Err(SolveError::NoPathFound { start, end })
}

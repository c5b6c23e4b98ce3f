use super::{SolveError, path::reconstruct_path};
use crate::maze::{Coord, Grid, Path, offset};

/// Search order: down, right, up, left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Depth-first search with an explicit stack.
///
/// The top of the stack is only peeked. It advances to its first eligible
/// neighbour and is popped once it has none left.
pub fn solve_dfs(grid: &mut Grid, start: Coord, end: Coord) -> Result<Path, SolveError> {
    let mut stack = vec![start];
    grid[start].visited = true;

    while let Some(&current) = stack.last() {
        if current == end {
            return Ok(reconstruct_path(grid, Some(current)));
        }

        let next = DIRECTIONS
            .iter()
            .map(|&delta| offset(current, delta))
            .find(|&c| grid.contains(c) && grid[c].is_open_and_unvisited());

        match next {
            Some(neighbor) => {
                let cell = &mut grid[neighbor];
                cell.visited = true;
                cell.predecessor = Some(current);
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    Err(SolveError::NoPathFound { start, end })
}

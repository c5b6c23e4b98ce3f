mod bfs;
mod dfs;
mod path;

use thiserror::Error;

use crate::maze::{Coord, Grid, Path};
use bfs::solve_bfs;
use dfs::solve_dfs;
pub use path::reconstruct_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::Dfs, Solver::Bfs];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Why a solve produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The endpoint lies outside the grid or on a wall.
    #[error("endpoint {0:?} is out of bounds or on a wall")]
    InvalidEndpoint(Coord),
    /// The search ran out of cells before reaching the end.
    #[error("no path from {start:?} to {end:?}")]
    NoPathFound { start: Coord, end: Coord },
}

fn validate_endpoint(grid: &Grid, coord: Coord) -> Result<(), SolveError> {
    if grid.is_open(coord) {
        Ok(())
    } else {
        Err(SolveError::InvalidEndpoint(coord))
    }
}

/// Finds the route from `start` to `end` through the carved grid.
///
/// Traversal state from any earlier solve is wiped first, so repeated calls
/// with the same endpoints give the same path.
pub fn solve_maze(
    grid: &mut Grid,
    solver: Solver,
    start: Coord,
    end: Coord,
) -> Result<Path, SolveError> {
    grid.reset_traversal();
    validate_endpoint(grid, start)?;
    validate_endpoint(grid, end)?;

    let result = match solver {
        Solver::Dfs => solve_dfs(grid, start, end),
        Solver::Bfs => solve_bfs(grid, start, end),
    };
    match &result {
        Ok(path) => tracing::debug!(
            "[solve] {} found a path of {} cells from {:?} to {:?}",
            solver,
            path.len(),
            start,
            end
        ),
        Err(e) => tracing::debug!("[solve] {} failed: {}", solver, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};
    use crate::maze::{Cell, is_adjacent};

    fn generate(rows: usize, cols: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols);
        let mut rng = get_rng(Some(seed));
        generate_maze(&mut grid, Generator::RecurBacktrack, &mut rng);
        grid
    }

    fn assert_valid_path(grid: &Grid, path: &Path, start: Coord, end: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.iter().all(|&c| grid.is_open(c)));
        assert!(path.windows(2).all(|w| is_adjacent(w[0], w[1])));
    }

    #[test]
    fn test_5x5_scenario() {
        for seed in 0..10 {
            let mut grid = generate(5, 5, seed);
            for solver in Solver::ALL {
                let path = solve_maze(&mut grid, solver, (1, 1), (3, 3)).unwrap();
                assert_valid_path(&grid, &path, (1, 1), (3, 3));
            }
        }
    }

    #[test]
    fn test_dfs_and_bfs_agree_on_every_pair() {
        let mut grid = generate(9, 11, 17);
        let open = grid.open_cells().collect::<Vec<_>>();
        for &a in &open {
            for &b in &open {
                let dfs = solve_maze(&mut grid, Solver::Dfs, a, b).unwrap();
                let bfs = solve_maze(&mut grid, Solver::Bfs, a, b).unwrap();
                assert_valid_path(&grid, &dfs, a, b);
                assert_eq!(dfs, bfs, "paths differ between {a:?} and {b:?}");
            }
        }
    }

    #[test]
    fn test_agreement_on_larger_mazes() {
        for seed in 0..5 {
            let mut grid = generate(41, 61, seed);
            let end = (grid.rows() - 2, grid.cols() - 2);
            let dfs = solve_maze(&mut grid, Solver::Dfs, (1, 1), end).unwrap();
            let bfs = solve_maze(&mut grid, Solver::Bfs, (1, 1), end).unwrap();
            assert_valid_path(&grid, &dfs, (1, 1), end);
            assert_eq!(dfs, bfs);
        }
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let mut grid = generate(21, 21, 8);
        for solver in Solver::ALL {
            let first = solve_maze(&mut grid, solver, (1, 1), (19, 19)).unwrap();
            grid.reset_traversal();
            let second = solve_maze(&mut grid, solver, (1, 1), (19, 19)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_minimal_grid_trivial_path() {
        let mut grid = generate(1, 1, 0);
        for solver in Solver::ALL {
            assert_eq!(solve_maze(&mut grid, solver, (1, 1), (1, 1)), Ok(vec![(1, 1)]));
        }
    }

    #[test]
    fn test_invalid_endpoints() {
        let mut grid = generate(7, 7, 2);
        for solver in Solver::ALL {
            assert_eq!(
                solve_maze(&mut grid, solver, (0, 0), (5, 5)),
                Err(SolveError::InvalidEndpoint((0, 0)))
            );
            assert_eq!(
                solve_maze(&mut grid, solver, (1, 1), (7, 3)),
                Err(SolveError::InvalidEndpoint((7, 3)))
            );
            assert_eq!(
                solve_maze(&mut grid, solver, (usize::MAX, 1), (1, 1)),
                Err(SolveError::InvalidEndpoint((usize::MAX, 1)))
            );
        }
    }

    #[test]
    fn test_disconnected_grid_reports_no_path() {
        let mut grid = Grid::new(5, 5);
        grid[(1, 1)] = Cell::CARVED;
        grid[(3, 3)] = Cell::CARVED;
        for solver in Solver::ALL {
            assert_eq!(
                solve_maze(&mut grid, solver, (1, 1), (3, 3)),
                Err(SolveError::NoPathFound {
                    start: (1, 1),
                    end: (3, 3)
                })
            );
        }
    }

    #[test]
    fn test_bfs_finds_shortest_with_loops() {
        // Open 3x3 room, so several routes exist.
        let mut grid = Grid::new(5, 5);
        for row in 1..4 {
            for col in 1..4 {
                grid[(row, col)] = Cell::CARVED;
            }
        }
        let bfs = solve_maze(&mut grid, Solver::Bfs, (1, 1), (3, 3)).unwrap();
        assert_eq!(bfs.len(), 5);
        let dfs = solve_maze(&mut grid, Solver::Dfs, (1, 1), (3, 3)).unwrap();
        assert_valid_path(&grid, &dfs, (1, 1), (3, 3));
        // Down first, then right.
        assert_eq!(dfs, vec![(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]);
    }
}

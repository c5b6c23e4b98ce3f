use rand::rngs::StdRng;

use crate::{
    generators::{CARVE_START, Generator, generate_maze, get_rng},
    maze::{Coord, Grid, Path},
    solvers::{SolveError, Solver, solve_maze},
};

/// Start and end of the most recent solve, kept for display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

/// One maze and the random source that carves it.
pub struct MazeSession {
    grid: Grid,
    rng: StdRng,
    markers: Markers,
}

impl MazeSession {
    /// Creates an uncarved grid. Without a seed the generator is seeded from the clock.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let grid = Grid::new(rows, cols);
        tracing::info!(
            "[session] new {}x{} grid (requested {}x{}), seed: {:?}",
            grid.rows(),
            grid.cols(),
            rows,
            cols,
            seed
        );
        MazeSession {
            grid,
            rng: get_rng(seed),
            markers: Markers::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    pub fn generate(&mut self) {
        self.generate_with(Generator::RecurBacktrack);
    }

    pub fn generate_with(&mut self, generator: Generator) {
        generate_maze(&mut self.grid, generator, &mut self.rng);
        self.markers = Markers::default();
    }

    pub fn default_start(&self) -> Coord {
        CARVE_START
    }

    /// Bottom-right lattice cell of the adjusted grid.
    pub fn default_end(&self) -> Coord {
        (self.grid.rows() - 2, self.grid.cols() - 2)
    }

    /// Solves from `start` to `end`. The markers move once both endpoints are valid.
    pub fn solve(&mut self, solver: Solver, start: Coord, end: Coord) -> Result<Path, SolveError> {
        let result = solve_maze(&mut self.grid, solver, start, end);
        if !matches!(result, Err(SolveError::InvalidEndpoint(_))) {
            self.markers = Markers {
                start: Some(start),
                end: Some(end),
            };
        }
        result
    }
}

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::CARVE_START;
use recur_backtrack::recursive_backtrack;

use crate::maze::Grid;

/// Get a random number generator, seeded for reproducibility or from the clock.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(clock_seed()),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
        }
    }
}

/// Wipes the grid and carves a fresh maze into it.
///
/// Traversal state is cleared afterwards so the grid is ready to be solved.
pub fn generate_maze<R: Rng + ?Sized>(grid: &mut Grid, generator: Generator, rng: &mut R) {
    grid.reset_all();
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, rng),
    }
    grid.reset_traversal();
}

use rand::{Rng, seq::SliceRandom};

use crate::maze::{Cell, Coord, Grid, offset};

/// Where carving begins. Starting on odd coordinates keeps the outer border solid.
pub const CARVE_START: Coord = (1, 1);

/// Lattice steps two cells away: up, right, down, left.
const DIRECTIONS: [(isize, isize); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// A cell on the carving stack together with the directions it still has to try.
struct Frame {
    coord: Coord,
    order: [usize; 4],
    next: usize,
}

/// Opens `coord` and draws its shuffled direction order.
fn enter<R: Rng + ?Sized>(grid: &mut Grid, coord: Coord, rng: &mut R) -> Frame {
    grid[coord] = Cell::CARVED;
    let mut order = [0, 1, 2, 3];
    order.shuffle(rng);
    Frame {
        coord,
        order,
        next: 0,
    }
}

/// Carves a perfect maze into an all-wall grid, depth first.
///
/// Each frame tries its four lattice neighbours in its own random order; an
/// unvisited neighbour gets the wall between them knocked out and becomes the
/// new top of the stack. A frame with nothing left to try is popped, which is
/// the backtracking step.
///
/// The knocked-out wall is marked visited too, so it is never mistaken for a
/// fresh neighbour later on.
pub fn recursive_backtrack<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    if !grid.contains(CARVE_START) {
        return;
    }

    let mut stack = vec![enter(grid, CARVE_START, rng)];
    let mut carved = 1usize;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.order.len() {
            stack.pop();
            continue;
        }
        let (dr, dc) = DIRECTIONS[frame.order[frame.next]];
        frame.next += 1;
        let current = frame.coord;

        let neighbor = offset(current, (dr, dc));
        if grid.contains(neighbor) && !grid[neighbor].visited {
            grid[offset(current, (dr / 2, dc / 2))] = Cell::CARVED;
            stack.push(enter(grid, neighbor, rng));
            carved += 2;
        }
    }

    tracing::debug!(
        "[generate] carved {} cells in a {}x{} grid",
        carved,
        grid.rows(),
        grid.cols()
    );
}

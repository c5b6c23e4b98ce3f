use super::Coord;

/// A single square of the grid.
///
/// `visited` means "carved" while a maze is being generated and "discovered"
/// while it is being solved. `predecessor` is only written by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub is_wall: bool,
    pub visited: bool,
    /// The cell from which a search first reached this one.
    pub predecessor: Option<Coord>,
}

impl Cell {
    pub const WALL: Cell = Cell {
        is_wall: true,
        visited: false,
        predecessor: None,
    };

    /// An open cell that has been reached by the current pass.
    pub const CARVED: Cell = Cell {
        is_wall: false,
        visited: true,
        predecessor: None,
    };

    /// Forget everything a search left behind, keeping the wall layout.
    pub fn clear_traversal(&mut self) {
        self.visited = false;
        self.predecessor = None;
    }

    /// Whether a search may step onto this cell.
    pub fn is_open_and_unvisited(&self) -> bool {
        !self.is_wall && !self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_traversal_keeps_wall_state() {
        let mut cell = Cell {
            is_wall: false,
            visited: true,
            predecessor: Some((1, 2)),
        };
        cell.clear_traversal();
        assert!(!cell.is_wall);
        assert!(!cell.visited);
        assert_eq!(cell.predecessor, None);
    }

    #[test]
    fn test_open_and_unvisited() {
        assert!(!Cell::WALL.is_open_and_unvisited());
        assert!(!Cell::CARVED.is_open_and_unvisited());
        let mut cell = Cell::CARVED;
        cell.clear_traversal();
        assert!(cell.is_open_and_unvisited());
    }
}

use std::fmt;
use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, Stylize},
};

use crate::maze::{Coord, Grid};
use crate::session::Markers;

/// What a single grid position looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Path,
    Wall,
    Start,
    End,
    Floor,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: usize = 2;

    pub fn symbol(&self) -> &'static str {
        match self {
            Tile::Path => "* ",
            Tile::Wall => "# ",
            Tile::Start => "S ",
            Tile::End => "E ",
            Tile::Floor => "  ",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        let styled_symbol = match self {
            Tile::Path => symbol.with(Color::Green).bold(),
            Tile::Wall => symbol.with(Color::DarkGrey),
            Tile::Start => symbol.with(Color::Blue).bold(),
            Tile::End => symbol.with(Color::Red).bold(),
            Tile::Floor => symbol.with(Color::Reset),
        };
        write!(f, "{}", styled_symbol)
    }
}

/// Picks the tile for `coord`. Path membership wins, then walls, then the start and end markers.
pub fn tile_at(grid: &Grid, coord: Coord, markers: Markers, path: &[Coord]) -> Tile {
    if path.contains(&coord) {
        Tile::Path
    } else if grid[coord].is_wall {
        Tile::Wall
    } else if markers.start == Some(coord) {
        Tile::Start
    } else if markers.end == Some(coord) {
        Tile::End
    } else {
        Tile::Floor
    }
}

/// Renders the grid as uncoloured text, one line per row.
pub fn render_plain(grid: &Grid, markers: Markers, path: &[Coord]) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * Tile::WIDTH + 1));
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push_str(tile_at(grid, (row, col), markers, path).symbol());
        }
        out.push('\n');
    }
    out
}

/// Prints the coloured grid to `out`, followed by a blank line.
pub fn print_maze<W: Write>(
    out: &mut W,
    grid: &Grid,
    markers: Markers,
    path: &[Coord],
) -> std::io::Result<()> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            queue!(out, Print(tile_at(grid, (row, col), markers, path)))?;
        }
        queue!(out, Print("\n"))?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

use std::io::Write;
use std::process::ExitCode;

use mazepath::{
    config::Config,
    logging,
    maze::Grid,
    render::print_maze,
    session::MazeSession,
    solvers::{SolveError, Solver},
};

fn read_line(input: &mut String) -> std::io::Result<&str> {
    std::io::stdout().flush()?;
    input.clear();
    std::io::stdin().read_line(input)?;
    Ok(input.trim())
}

/// Parses "rows cols". Both must lie in `1..=Grid::MAX_DIM`.
fn parse_dims(line: &str) -> Option<(usize, usize)> {
    let dims = line
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .filter(|d| (1..=Grid::MAX_DIM).contains(d))
        .collect::<Vec<_>>();
    match dims[..] {
        [rows, cols] => Some((rows, cols)),
        _ => None,
    }
}

fn main() -> std::io::Result<ExitCode> {
    let config = Config::from_env().map_err(std::io::Error::other)?;
    let _guard = logging::init(&config).map_err(std::io::Error::other)?;

    let mut input = String::new();
    print!("Enter maze dimensions (rows cols, odd recommended, e.g. 21 31): ");

    let Some((rows, cols)) = parse_dims(read_line(&mut input)?) else {
        eprintln!(
            "Please enter two numbers between 1 and {} for rows and cols.",
            Grid::MAX_DIM
        );
        return Ok(ExitCode::FAILURE);
    };

    let mut session = MazeSession::new(rows, cols, config.seed);
    let mut stdout = std::io::stdout();

    println!("\nGenerating maze...");
    session.generate();
    println!("Maze generated:");
    print_maze(&mut stdout, session.grid(), session.markers(), &[])?;

    let (start, end) = (session.default_start(), session.default_end());
    println!("Default start (S): {:?}", start);
    println!("Default end (E): {:?}", end);

    // Let user select the algorithm
    println!("\nSelect maze solving algorithm:");
    for (i, solver) in Solver::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, solver);
    }
    print!("Your choice: ");
    let solver = match read_line(&mut input)? {
        "1" => Solver::Dfs,
        "2" => Solver::Bfs,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("\nSolving with {}...", solver);
    match session.solve(solver, start, end) {
        Ok(path) => {
            println!("Solution found! ({} cells)", path.len());
            print_maze(&mut stdout, session.grid(), session.markers(), &path)?;
        }
        Err(e @ SolveError::InvalidEndpoint(_)) => {
            println!("Bad start or end point: {}", e);
            print_maze(&mut stdout, session.grid(), session.markers(), &[])?;
        }
        Err(e @ SolveError::NoPathFound { .. }) => {
            println!("No solution found: {}", e);
            print_maze(&mut stdout, session.grid(), session.markers(), &[])?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dims() {
        assert_eq!(parse_dims("21 31"), Some((21, 31)));
        assert_eq!(parse_dims("  4 6 extra"), Some((4, 6)));
    }

    #[test]
    fn test_parse_dims_rejects_bad_input() {
        assert_eq!(parse_dims("21"), None);
        assert_eq!(parse_dims("0 5"), None);
        assert_eq!(parse_dims("five 5"), None);
        assert_eq!(parse_dims("4000000000 4000000000"), None);
        assert_eq!(parse_dims(&format!("{} 5", Grid::MAX_DIM + 1)), None);
    }
}

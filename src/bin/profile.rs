use std::time::Instant;

use mazepath::{config::Config, logging, session::MazeSession, solvers::Solver};

const PROFILE_DIM: usize = 2001;

fn main() -> std::io::Result<()> {
    let config = Config::from_env().map_err(std::io::Error::other)?;
    let _guard = logging::init(&config).map_err(std::io::Error::other)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let mut session = MazeSession::new(PROFILE_DIM, PROFILE_DIM, config.seed);
    for iter in 0..num_iters {
        let started = Instant::now();
        session.generate();
        let generated = started.elapsed();

        let (start, end) = (session.default_start(), session.default_end());
        for solver in Solver::ALL {
            let started = Instant::now();
            let path = session
                .solve(solver, start, end)
                .map_err(std::io::Error::other)?;
            tracing::info!(
                "[profile] iter {} {}: {} cells in {:?}",
                iter,
                solver,
                path.len(),
                started.elapsed()
            );
        }
        println!("iter {iter}: generated {PROFILE_DIM}x{PROFILE_DIM} in {generated:?}");
    }
    Ok(())
}

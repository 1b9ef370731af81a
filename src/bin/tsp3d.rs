use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;
use tsp3d_engine::config::CONFIG;
use tsp3d_engine::console::{read_point_count, read_points, render_report, TokenReader};
use tsp3d_engine::search::solver::Solver;
use tsp3d_engine::Point;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());
    let mut out = io::stdout();
    let mut err = io::stderr();

    writeln!(out, "=== 3D TSP Exact Solver ===")?;
    writeln!(out, "Complexity: O(n!). Recommended n <= 12.\n")?;

    let start = Point::ORIGIN;
    let count = read_point_count(&mut reader, &mut out, &mut err)
        .context("failed to read the number of points")?;
    let targets =
        read_points(&mut reader, &mut out, count).context("failed to read point coordinates")?;

    writeln!(out, "\nComputing shortest path...")?;

    let solver = Solver::new((*CONFIG).clone());
    let report = solver
        .solve(start, &targets)
        .with_context(|| format!("cannot solve for {} points", targets.len()))?;

    info!(
        "evaluated {} orderings in {:?}",
        report.permutations_evaluated, report.elapsed
    );

    write!(out, "{}", render_report(&start, &report.tour))?;
    out.flush()?;
    Ok(())
}

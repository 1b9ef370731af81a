use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use super::permutation::next_permutation_by;
use super::InvalidInput;
use crate::config::EngineConfig;
use crate::Point;

/// Shortest ordering found and its length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub total_distance: f64,
    pub path: Vec<Point>,
}

/// Outcome of a [`Solver`] run.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub tour: Tour,
    pub permutations_evaluated: u64,
    pub elapsed: Duration,
}

/// Length of the open path `start -> path[0] -> ... -> path[n-1]`.
/// No closing edge back to `start` is added.
pub fn path_length(start: &Point, path: &[Point]) -> f64 {
    let Some(first) = path.first() else {
        return 0.0;
    };
    path.windows(2)
        .fold(start.distance(first), |acc, leg| acc + leg[0].distance(&leg[1]))
}

/// Exhaustively searches every ordering of `destinations` for the shortest
/// open path from `start`.
pub fn solve(start: Point, destinations: &[Point]) -> Result<Tour, InvalidInput> {
    solve_with_observer(start, destinations, |_, _| {})
}

/// Same search as [`solve`], calling `observer` with each ordering and its
/// length in enumeration order.
///
/// Orderings are enumerated in lexicographic succession from the sorted
/// destinations. Ties keep the first ordering found.
pub fn solve_with_observer<F>(
    start: Point,
    destinations: &[Point],
    mut observer: F,
) -> Result<Tour, InvalidInput>
where
    F: FnMut(&[Point], f64),
{
    validate(destinations)?;

    let mut ordering = destinations.to_vec();
    ordering.sort_by(Point::lex_cmp);

    debug!("searching {} destinations from {}", ordering.len(), start);

    // The sorted ordering is always the incumbent, even if its length
    // overflows to infinity.
    let first = path_length(&start, &ordering);
    observer(&ordering, first);
    let mut best = Tour {
        total_distance: first,
        path: ordering.clone(),
    };

    while next_permutation_by(&mut ordering, Point::lex_cmp) {
        let length = path_length(&start, &ordering);
        observer(&ordering, length);

        if length < best.total_distance {
            best.total_distance = length;
            best.path.clear();
            best.path.extend_from_slice(&ordering);
        }
    }

    debug!("shortest path length {}", best.total_distance);
    Ok(best)
}

fn validate(destinations: &[Point]) -> Result<(), InvalidInput> {
    if destinations.is_empty() {
        return Err(InvalidInput::EmptyDestinations);
    }
    if let Some(index) = destinations.iter().position(|p| !p.is_finite()) {
        return Err(InvalidInput::NonFiniteCoordinate { index });
    }
    Ok(())
}

/// Runs the search under an [`EngineConfig`], enforcing its destination cap.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: EngineConfig,
}

impl Solver {
    pub fn new(config: EngineConfig) -> Self {
        Solver { config }
    }

    pub fn solve(
        &self,
        start: Point,
        destinations: &[Point],
    ) -> Result<SearchReport, InvalidInput> {
        if let Some(limit) = self.config.max_destinations {
            if destinations.len() > limit {
                return Err(InvalidInput::TooManyDestinations {
                    count: destinations.len(),
                    limit,
                });
            }
        }

        let started = Instant::now();
        let mut evaluated = 0_u64;
        let tour = solve_with_observer(start, destinations, |_, _| evaluated += 1)?;
        let elapsed = started.elapsed();

        debug!(
            "evaluated {} orderings in {:.3}s",
            evaluated,
            elapsed.as_secs_f64()
        );

        Ok(SearchReport {
            tour,
            permutations_evaluated: evaluated,
            elapsed,
        })
    }
}

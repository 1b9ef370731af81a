use std::io::Cursor;

use assert_approx_eq::assert_approx_eq;
use tsp3d_engine::config::EngineConfig;
use tsp3d_engine::console::{read_point_count, read_points, render_report, TokenReader};
use tsp3d_engine::search::solver::{path_length, solve, solve_with_observer, Solver};
use tsp3d_engine::search::InvalidInput;
use tsp3d_engine::Point;

fn sample_points() -> Vec<Point> {
    vec![
        Point::new(3.0, -1.0, 2.0),
        Point::new(-2.5, 4.0, 0.0),
        Point::new(0.5, 0.5, -3.0),
        Point::new(6.0, 2.0, 1.0),
        Point::new(-1.0, -4.0, 2.5),
        Point::new(2.0, 3.0, 3.0),
    ]
}

/// Every ordering of `points`, built by recursive swapping.
fn reference_orderings(points: &mut Vec<Point>, k: usize, out: &mut Vec<Vec<Point>>) {
    if k == points.len() {
        out.push(points.clone());
        return;
    }
    for i in k..points.len() {
        points.swap(k, i);
        reference_orderings(points, k + 1, out);
        points.swap(k, i);
    }
}

#[test]
fn result_is_no_longer_than_any_ordering() {
    let start = Point::new(0.0, 0.0, 0.0);
    let mut points = sample_points();
    let tour = solve(start, &points).expect("tour");

    let mut all = Vec::new();
    reference_orderings(&mut points, 0, &mut all);
    assert_eq!(all.len(), 720);

    for ordering in &all {
        assert!(tour.total_distance <= path_length(&start, ordering));
    }
    assert_eq!(tour.total_distance, path_length(&start, &tour.path));
}

#[test]
fn enumeration_covers_factorial_orderings() {
    let points = sample_points();
    let mut count = 0_u64;
    let mut previous: Option<Vec<Point>> = None;
    solve_with_observer(Point::ORIGIN, &points, |ordering, _| {
        count += 1;
        if let Some(prev) = &previous {
            let ascending = prev
                .iter()
                .zip(ordering)
                .map(|(a, b)| a.lex_cmp(b))
                .find(|o| o.is_ne());
            assert_eq!(ascending, Some(std::cmp::Ordering::Less));
        }
        previous = Some(ordering.to_vec());
    })
    .expect("tour");
    assert_eq!(count, 720);
}

#[test]
fn input_order_does_not_change_result() {
    let start = Point::new(1.0, -1.0, 0.5);
    let points = sample_points();
    let expected = solve(start, &points).expect("tour");

    let mut reversed = points.clone();
    reversed.reverse();
    let mut rotated = points.clone();
    rotated.rotate_left(2);
    let mut sorted = points.clone();
    sorted.sort_by(Point::lex_cmp);

    for input in [reversed, rotated, sorted, points] {
        assert_eq!(solve(start, &input).expect("tour"), expected);
    }
}

#[test]
fn repeated_solves_are_identical() {
    let points = sample_points();
    let first = solve(Point::ORIGIN, &points).expect("tour");
    for _ in 0..3 {
        assert_eq!(solve(Point::ORIGIN, &points).expect("tour"), first);
    }
}

#[test]
fn unit_square_from_origin_has_length_three() {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
    ];
    let tour = solve(Point::ORIGIN, &points).expect("tour");
    assert_approx_eq!(tour.total_distance, 3.0);
    assert_eq!(tour.path.len(), 3);
}

#[test]
fn coincident_points_cost_one_leg() {
    let p = Point::new(2.0, 0.0, 0.0);
    let tour = solve(Point::ORIGIN, &[p, p]).expect("tour");
    assert_eq!(tour.total_distance, Point::ORIGIN.distance(&p));
    assert_eq!(tour.path, vec![p, p]);
}

#[test]
fn single_point_degenerates_to_direct_leg() {
    let start = Point::new(-1.0, 2.0, 0.0);
    let p = Point::new(5.0, -3.0, 7.5);
    let tour = solve(start, &[p]).expect("tour");
    assert_eq!(tour.total_distance, start.distance(&p));
    assert_eq!(tour.path, vec![p]);
}

#[test]
fn empty_destinations_fail_with_invalid_input() {
    let err = solve(Point::ORIGIN, &[]).unwrap_err();
    assert_eq!(err, InvalidInput::EmptyDestinations);

    let solver = Solver::new(EngineConfig::default());
    assert_eq!(
        solver.solve(Point::ORIGIN, &[]).unwrap_err(),
        InvalidInput::EmptyDestinations
    );
}

#[test]
fn console_round_trip_from_typed_input() {
    let input = "zero\n3\n1 0 0\n0 1 0\n1 1 0\n";
    let mut reader = TokenReader::new(Cursor::new(input.as_bytes().to_vec()));
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();

    let count = read_point_count(&mut reader, &mut out, &mut err).expect("count");
    let points = read_points(&mut reader, &mut out, count).expect("points");
    let report = Solver::default()
        .solve(Point::ORIGIN, &points)
        .expect("report");

    assert_eq!(report.permutations_evaluated, 6);
    let text = render_report(&Point::ORIGIN, &report.tour);
    assert!(text.contains("Start: (0.00, 0.00, 0.00)\n"));
    assert!(text.contains("Total Minimum Distance: 3.00\n"));
    assert!(!err.is_empty());
}

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::Point;

pub const COUNT_PROMPT: &str = "Enter number of points to visit: ";
pub const COUNT_RETRY: &str = "Invalid input. Please enter an integer > 0: ";

/// Whitespace-separated tokens read lazily from a line-oriented source.
/// Tokens on one line may satisfy several consecutive reads.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        TokenReader {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    fn expect_token(&mut self, what: &str) -> io::Result<String> {
        self.next_token()?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended while reading {}", what),
            )
        })
    }
}

/// Asks for the number of destinations until a positive integer arrives.
/// Rejected input discards the rest of its line and re-prompts on `err`.
pub fn read_point_count<R, W, E>(
    reader: &mut TokenReader<R>,
    out: &mut W,
    err: &mut E,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    write!(out, "{}", COUNT_PROMPT)?;
    out.flush()?;

    loop {
        let token = reader.expect_token("the point count")?;
        match token.parse::<usize>() {
            Ok(count) if count >= 1 => return Ok(count),
            _ => {
                reader.discard_line();
                write!(err, "{}", COUNT_RETRY)?;
                err.flush()?;
            }
        }
    }
}

/// Reads `count` coordinate triples, prompting for each one.
///
/// Coordinates are not validated: anything that is not a finite number is
/// read as `0.0`.
pub fn read_points<R, W>(
    reader: &mut TokenReader<R>,
    out: &mut W,
    count: usize,
) -> io::Result<Vec<Point>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Enter coordinates for {} points (x y z):", count)?;

    let mut points = Vec::with_capacity(count);
    for n in 1..=count {
        write!(out, "Point {}: ", n)?;
        out.flush()?;

        let mut coords = [0.0_f64; 3];
        for coord in coords.iter_mut() {
            let token = reader.expect_token("point coordinates")?;
            *coord = parse_coordinate(&token, n);
        }
        points.push(Point::new(coords[0], coords[1], coords[2]));
    }
    Ok(points)
}

fn parse_coordinate(token: &str, point: usize) -> f64 {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!("point {}: malformed coordinate {:?}, using 0", point, token);
            0.0
        }
    }
}

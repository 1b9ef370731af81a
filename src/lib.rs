pub mod config;
pub mod console;
pub mod search;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A location in 3D space. Carries no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Lexicographic three-way comparison on (x, y, z).
    ///
    /// Only used to give permutation enumeration a total order; it has no
    /// geometric meaning. Total over finite coordinates.
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        cmp_coord(self.x, other.x)
            .then_with(|| cmp_coord(self.y, other.y))
            .then_with(|| cmp_coord(self.z, other.z))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z, p = p),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

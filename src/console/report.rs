use std::fmt;

use crate::search::solver::Tour;
use crate::Point;

const RULE: &str = "---------------------------";

/// Human-readable trace of a solved tour, two decimals throughout.
pub struct Report<'a> {
    pub start: &'a Point,
    pub tour: &'a Tour,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Optimal Path found!")?;
        writeln!(f, "Start: {:.2}", self.start)?;
        for point in &self.tour.path {
            write!(f, " -> {:.2}", point)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Total Minimum Distance: {:.2}", self.tour.total_distance)?;
        writeln!(f, "{}", RULE)
    }
}

pub fn render_report(start: &Point, tour: &Tour) -> String {
    Report { start, tour }.to_string()
}

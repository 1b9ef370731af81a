//! Text-interface collaborators around the search engine: reading the
//! destination set from a user and rendering the result.

pub mod prompt;
pub mod report;

pub use prompt::{read_point_count, read_points, TokenReader};
pub use report::{render_report, Report};

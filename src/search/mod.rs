pub mod permutation;
pub mod solver;

use thiserror::Error;

/// Rejected engine input. Every variant is a precondition violation by the
/// caller; the search itself cannot fail once it starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("invalid input: destination set is empty")]
    EmptyDestinations,
    #[error("invalid input: destination {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("invalid input: {count} destinations exceeds the limit of {limit}")]
    TooManyDestinations { count: usize, limit: usize },
}

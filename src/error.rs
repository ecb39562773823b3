use crate::config::Float;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColonyError {
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities { count: usize },
    #[error("too many cities: {count} (at most {max} are supported)", max = crate::index::CityIndex::MAX_CITIES)]
    TooManyCities { count: usize },
    #[error("ant count must be positive")]
    NoAnts,
    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: Float,
        expected: &'static str,
    },
    #[error("city #{index} has non-finite coordinates")]
    InvalidCity { index: usize },
}

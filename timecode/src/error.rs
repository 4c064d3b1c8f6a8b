use thiserror::Error;

/// Errors returned when constructing, converting or parsing times.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("the value is outside of the representable range")]
    Overflow,
    #[error("seconds must be a finite number")]
    NotFinite,
    #[error("negative times can not be converted to an unsigned duration")]
    Negative,
    #[error("unit {0} not recognized")]
    UnknownUnit(String),
    #[error("no numeric value found in {0:?}")]
    InvalidNumber(String),
}

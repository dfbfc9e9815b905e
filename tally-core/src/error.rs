//! Error types for tally-core

use crate::calendar::CalendarField;
use crate::interval::Interval;
use thiserror::Error;

/// Main error type for the tally-core library
#[derive(Error, Debug)]
pub enum Error {
    /// A calendar unit the unit counter cannot count in
    #[error("unsupported unit: {0:?}")]
    UnsupportedUnit(CalendarField),

    /// A lookback window used where a bucket size is required
    #[error("interval {0} has no bucket size")]
    NotBucketable(Interval),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Entry source failure
    #[error("store error: {0}")]
    Store(String),
}

/// Result type alias for tally-core
pub type Result<T> = std::result::Result<T, Error>;

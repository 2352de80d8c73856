//! Error types for the almanac workspace.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report.  Rule evaluation itself never errors — inapplicable rules yield
//! `None` — so these variants only surface at the edges: date construction,
//! string parsing, and the lunar conversion oracle.

use thiserror::Error;

/// The top-level error type used throughout the almanac workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range components or arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed as a calendar date.
    #[error("parse error: {0}")]
    Parse(String),

    /// The lunar conversion oracle could not answer a query.
    #[error("lunar conversion error: {0}")]
    Lunar(String),
}

/// Shorthand `Result` type used throughout the almanac workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Crate error type. Scoring itself is total; only construction, config and
//! argument parsing can fail.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid membership shape ({a}, {b}, {c}): control points must be finite and ordered a <= b <= c")]
    InvalidShape { a: f64, b: f64, c: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Text stored for a target whose page could not be fetched.
pub const FETCH_ERROR: &str = "FETCH_ERROR";

/// The value derived from one page fetch and compared across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Number of ticket-status markers found on the page.
    Count(usize),
    /// The page could not be fetched.
    FetchError,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Count(n) => write!(f, "{n}"),
            Signal::FetchError => f.write_str(FETCH_ERROR),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized signal text: '{0}'")]
pub struct ParseSignalError(pub String);

impl FromStr for Signal {
    type Err = ParseSignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == FETCH_ERROR {
            return Ok(Signal::FetchError);
        }
        s.parse::<usize>()
            .map(Signal::Count)
            .map_err(|_| ParseSignalError(s.to_string()))
    }
}

pub mod base;
pub mod modules;
pub mod utils;

use std::fmt::Display;

pub use base::api::Api;
pub use utils::params::{Id, Params};

#[derive(Debug)]
pub enum Error {
    /// The request failed: network error or a response body that isn't JSON. Holds the original error
    Request(reqwest::Error),
    /// Happens if the provided parameters aren't a flat record of scalars
    InvalidParams(String),
    /// Happens if the configured endpoint is unusable
    Config(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Request(e) => write!(f, "Request failed! ({e})"),
            Error::InvalidParams(e) => write!(f, "Invalid parameters! ({e})"),
            Error::Config(e) => write!(f, "Invalid configuration! ({e})"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

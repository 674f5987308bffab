// SPDX-License-Identifier: MPL-2.0
use crate::domain::notification::NotificationKey;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A width was neither a finite number nor a `"<integer>%"` string.
    InvalidWidthSpec(String),
    /// The key generator produced a key that is already active.
    DuplicateKey(NotificationKey),
    /// A color string was not a `#RGB` or `#RRGGBB` hex value.
    InvalidColor(String),
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWidthSpec(spec) => write!(f, "Invalid width spec: {}", spec),
            Error::DuplicateKey(key) => write!(f, "Duplicate notification key: {}", key),
            Error::InvalidColor(color) => write!(f, "Invalid color: {}", color),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors are `Clone` so they can travel inside Iced messages. Lower-level
//! errors (remote API, layout) keep their own enums and convert into
//! [`Error`] with `?`.

use crate::application::port::ApiError;
use crate::gallery::layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(#[from] ApiError),

    #[error("Layout Error: {0}")]
    Layout(#[from] LayoutError),
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_wraps_remote_failure() {
        let err: Error = ApiError::Remote {
            code: 100,
            message: "Invalid API Key".into(),
        }
        .into();
        assert!(matches!(err, Error::Api(ApiError::Remote { code: 100, .. })));
        assert!(format!("{}", err).contains("Invalid API Key"));
    }

    #[test]
    fn layout_error_wraps_zero_height() {
        let err: Error = LayoutError::ZeroDimension { index: 3 }.into();
        assert!(format!("{}", err).contains("index 3"));
    }
}

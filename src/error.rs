// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// An unknown severity label reached a string boundary (e.g. a CLI flag).
    Severity(String),
    /// A confirmation was requested while another one is still pending.
    ConfirmPending,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Severity(label) => write!(
                f,
                "Unknown severity `{}` (expected success, info, warning, or error)",
                label
            ),
            Error::ConfirmPending => {
                write!(f, "A confirmation prompt is already awaiting an answer")
            }
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
    fn severity_error_names_the_label() {
        let err = Error::Severity("fatal".into());
        assert!(format!("{}", err).contains("`fatal`"));
    }

    #[test]
    fn confirm_pending_has_a_stable_message() {
        let err = Error::ConfirmPending;
        assert!(format!("{}", err).contains("already awaiting"));
    }

    #[test]
    fn from_toml_de_error_produces_config_variant() {
        let parse_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }
}

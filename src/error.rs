//! Errors that can end a benchmark run.

use serde_json::Error as SerdeError;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Everything that can go wrong around the benchmarked call. The call itself has no
/// recoverable failures.
#[allow(clippy::enum_variant_names)]
#[derive(Debug)]
pub enum Error {
    /// Writing the report failed.
    IoError(io::Error),
    /// Serializing a JSON report failed.
    SerdeError(SerdeError),
    /// The requested input's Fibonacci number does not fit in a `u64`.
    InputOutOfRange {
        /// The rejected input.
        n: u32,
        /// The largest accepted input.
        max: u32,
    },
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IoError(inner) => write!(f, "Failed to write report: {}", inner),
            Error::SerdeError(inner) => write!(f, "Failed to serialize report: {}", inner),
            Error::InputOutOfRange { n, max } => write!(
                f,
                "Input {} is out of range; Fibonacci numbers above input {} overflow u64",
                n, max
            ),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::IoError(inner) => Some(inner),
            Error::SerdeError(inner) => Some(inner),
            Error::InputOutOfRange { .. } => None,
        }
    }
}
impl From<io::Error> for Error {
    fn from(other: io::Error) -> Error {
        Error::IoError(other)
    }
}
impl From<SerdeError> for Error {
    fn from(other: SerdeError) -> Error {
        Error::SerdeError(other)
    }
}

/// Convenience alias for results carrying this crate's [Error](enum.Error.html).
pub type Result<T> = ::std::result::Result<T, Error>;

/// Writes the error to stderr in the crate's log format.
pub fn log_error(e: &Error) {
    error!("error: {}", e);
}

#[cfg(test)]
mod test {
    use super::Error;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn io_error_keeps_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.to_string().starts_with("Failed to write report"));
        assert!(err.source().is_some());
    }

    #[test]
    fn out_of_range_message() {
        let err = Error::InputOutOfRange { n: 94, max: 93 };
        assert_eq!(
            err.to_string(),
            "Input 94 is out of range; Fibonacci numbers above input 93 overflow u64"
        );
        assert!(err.source().is_none());
    }
}

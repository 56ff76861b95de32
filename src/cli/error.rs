use std::fmt;

#[derive(Debug)]
pub enum Error {
    Clap(clap::Error),
    InvalidIterations(String),
    InvalidOutputFormat(String),
    ConflictingFlags(&'static [&'static str]),
}

impl From<clap::Error> for Error {
    fn from(e: clap::Error) -> Self {
        Self::Clap(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clap(err) => write!(f, "Arg-parse error: {}", err.message),
            Self::InvalidIterations(s) => {
                write!(f, "Invalid iteration count: {} (expected an integer >= 1)", s)
            }
            Self::InvalidOutputFormat(s) => write!(f, "Invalid output format: {}", s),
            Self::ConflictingFlags(flags) => {
                write!(f, "Multiple of conflicting flags: {:?}", flags)
            }
        }
    }
}

impl std::error::Error for Error {}

use std::{fmt, str::FromStr};

#[derive(Debug)]
pub struct TypeParseError(String);

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected value: {}", self.0)
    }
}

impl std::error::Error for TypeParseError {}

/// How each measurement is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// `Fibonacci number of 25 is 75025.` followed by `Calculation took <seconds>.`
    Human,
    /// One JSON object per measurement.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

impl FromStr for OutputFormat {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            invalid => Err(TypeParseError(invalid.to_owned())),
        }
    }
}

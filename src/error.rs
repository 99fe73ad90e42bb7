use thiserror::Error;

/// Errors that abort a NEC to EPS conversion
#[derive(Error, Debug)]
pub enum Error {
    /// No usable projection was selected, or the scale is not finite
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A GW record carried a coordinate that is not a finite number
    #[error("Error parsing NEC input at line {line}: field {field} is not a number: {token:?}")]
    Parse {
        line: usize,
        field: &'static str,
        token: String,
    },

    /// Scaling pushed a coordinate of the GW record on `line` out of range
    #[error("Coordinate out of range at line {line} after scaling by {scale}")]
    Overflow { line: usize, scale: f64 },

    #[error("No GW lines found in input")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The Hamming-distance window does not fit a non-negative 32-bit count.
    #[error(
        "Hamming distance must lie between 0 and {max}, got {value}. A negative window never reaches the base case."
    )]
    InvalidDistance { value: i64, max: u32 },

    /// The observational determinism selector is not one of the three shapes.
    #[error("Unknown observational determinism type {value}. Expected one of 1, 2 or 3.")]
    UnknownShape { value: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read preset file '{file}': {source}")]
    PresetRead {
        source: std::io::Error,
        file: String,
    },

    #[error("Failed to parse preset file '{file}': {source}")]
    PresetParse {
        source: toml::de::Error,
        file: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

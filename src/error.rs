use thiserror::Error;

/// Errors from the outer surfaces: configuration and input loading.
///
/// The geometry core never returns these. Bad geometry yields a
/// negative classification or a low score instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StarError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed path document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("input contains no paths")]
    NoPaths,
}

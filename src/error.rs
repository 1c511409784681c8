use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Invalid length: need at least {needed} samples, have {actual}")]
    InvalidLength { needed: usize, actual: usize },

    #[error("Unsupported parameter: {0}")]
    UnsupportedParameter(String),
}

pub type Result<T> = std::result::Result<T, SignalError>;

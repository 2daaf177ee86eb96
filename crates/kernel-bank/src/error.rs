use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or writing a kernel bank.
#[derive(Debug, Error)]
pub enum KernelBankError {
    #[error("cannot normalize kernel with magnitude {magnitude}")]
    NumericDomain { magnitude: f64 },
    #[error("kernel bank io error at {}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid kernel dimensions: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, KernelBankError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create directory {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Framebuffer device {} is not readable: {source}", path.display())]
    DeviceOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Framebuffer query failed on {}: {detail}", path.display())]
    DeviceQuery { path: PathBuf, detail: String },

    #[error("Framebuffer contents too short: read {actual} bytes, geometry requires {expected}")]
    ShortRead { expected: usize, actual: usize },

    #[error("Image could not be saved to {}: {detail}", path.display())]
    Encode { path: PathBuf, detail: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    /// Process exit code for this error class. 0 is success, 1 is reserved
    /// for failures outside the pipeline (logger setup).
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Filesystem { .. } => 3,
            AppError::DeviceOpen { .. } => 4,
            AppError::DeviceQuery { .. } => 5,
            AppError::ShortRead { .. } => 6,
            AppError::Encode { .. } => 7,
        }
    }
}

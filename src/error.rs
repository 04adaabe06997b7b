use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt image {path}: {reason}")]
    CorruptImage { path: PathBuf, reason: String },

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(PathBuf),

    #[error("Invalid scale factor: {0}. Must be a positive integer")]
    InvalidScale(i64),

    #[error("Scaled dimensions overflow: {width}x{height} at scale {scale}")]
    DimensionOverflow { width: u32, height: u32, scale: u32 },

    #[error(
        "Insufficient available memory: output buffer requires {0}MiB, but only {1}MiB available"
    )]
    InsufficientMemory(u64, u64),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to create output directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),
}

impl ResizeError {
    /// Whether the error is local to a single resize job.
    ///
    /// The batch walker logs recoverable errors and moves on to the next file;
    /// anything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ResizeError::Io(_)
                | ResizeError::Image(_)
                | ResizeError::UnsupportedFormat(_)
                | ResizeError::CorruptImage { .. }
                | ResizeError::DimensionOverflow { .. }
                | ResizeError::InsufficientMemory(_, _)
                | ResizeError::PngOptimization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_errors_are_recoverable() {
        let err = ResizeError::CorruptImage {
            path: PathBuf::from("a.png"),
            reason: "truncated".to_string(),
        };
        assert!(err.is_recoverable());
        assert!(ResizeError::UnsupportedFormat("heic".to_string()).is_recoverable());
        assert!(ResizeError::InsufficientMemory(4096, 512).is_recoverable());
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        assert!(!ResizeError::InvalidScale(0).is_recoverable());
        assert!(!ResizeError::FileNotFound(PathBuf::from("missing")).is_recoverable());

        let err = ResizeError::DirectoryCreationFailed {
            path: PathBuf::from("export"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_scale_message() {
        let err = ResizeError::InvalidScale(-3);
        assert_eq!(
            err.to_string(),
            "Invalid scale factor: -3. Must be a positive integer"
        );
    }
}

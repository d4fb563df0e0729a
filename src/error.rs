//! エラー型定義

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl ViewerError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ViewerError::Read {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_read() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ViewerError::read("results.csv", io_error);
        assert_eq!(format!("{}", error), "results.csv: file not found");
    }

    #[test]
    fn test_error_source_is_io() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = ViewerError::read("results.csv", io_error);
        let source = error.source().expect("source missing");
        assert!(source.to_string().contains("access denied"));
    }

    #[test]
    fn test_error_display_logging() {
        let error = ViewerError::Logging("already set".to_string());
        assert_eq!(format!("{}", error), "logging setup failed: already set");
    }

    #[test]
    fn test_error_debug() {
        let error = ViewerError::Logging("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Logging"));
        assert!(debug.contains("テスト"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("File operation failed: {path}")]
    FileOperation { path: String },

    #[error("Another sweep instance is already running (lock file: {path})")]
    AlreadyRunning { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn file_operation(path: impl Into<String>) -> Self {
        Self::FileOperation { path: path.into() }
    }

    pub fn already_running(path: impl Into<String>) -> Self {
        Self::AlreadyRunning { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let config_err = SweepError::invalid_configuration("task list is empty");
        assert!(matches!(
            config_err,
            SweepError::InvalidConfiguration { .. }
        ));
        assert_eq!(
            config_err.to_string(),
            "Invalid configuration: task list is empty"
        );

        let file_err = SweepError::file_operation("/tmp/foo.log");
        assert!(matches!(file_err, SweepError::FileOperation { .. }));
        assert_eq!(file_err.to_string(), "File operation failed: /tmp/foo.log");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sweep_err: SweepError = io_err.into();
        assert!(matches!(sweep_err, SweepError::Io(_)));
    }
}

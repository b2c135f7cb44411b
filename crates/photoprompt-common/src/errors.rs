use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while acquiring or reading the selected image.
///
/// These are the only pipeline failures that reach the user; remote
/// captioning and conversation failures are absorbed by their fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("failed to read image: {0}")]
    ReadFailure(String),

    #[error("not supported: {0}")]
    Unsupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PhotopromptError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("timeout_secs = 0".into());
        assert_eq!(err.to_string(), "config validation error: timeout_secs = 0");
    }

    #[test]
    fn image_error_display() {
        let err = ImageError::PermissionDenied("camera".into());
        assert_eq!(err.to_string(), "permission denied: camera");

        let err = ImageError::ReadFailure("no such file".into());
        assert_eq!(err.to_string(), "failed to read image: no such file");

        let err = ImageError::Unsupported("camera capture".into());
        assert_eq!(err.to_string(), "not supported: camera capture");
    }

    #[test]
    fn photoprompt_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PhotopromptError = config_err.into();
        assert!(matches!(err, PhotopromptError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn photoprompt_error_from_image() {
        let image_err = ImageError::ReadFailure("truncated".into());
        let err: PhotopromptError = image_err.into();
        assert!(matches!(err, PhotopromptError::Image(_)));
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn photoprompt_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PhotopromptError = io_err.into();
        assert!(matches!(err, PhotopromptError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}

//! Filesystem-backed image source for the terminal.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use photoprompt_common::{ImageError, ImageRef};
use photoprompt_session::ImageSource;

/// Treats a path given on the command line as the gallery pick.
///
/// There is no camera in a terminal, so a capture is always refused.
#[derive(Debug, Clone, Default)]
pub struct PathSource {
    path: Option<PathBuf>,
}

impl PathSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ImageSource for PathSource {
    async fn select_from_gallery(&self) -> Result<Option<ImageRef>, ImageError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => ImageError::PermissionDenied(path.display().to_string()),
            _ => ImageError::ReadFailure(format!("{}: {e}", path.display())),
        })?;
        if !metadata.is_file() {
            return Err(ImageError::Unsupported(format!(
                "{} is not a file",
                path.display()
            )));
        }

        Ok(Some(ImageRef::from_gallery(path.to_string_lossy())))
    }

    async fn capture_from_camera(&self) -> Result<Option<ImageRef>, ImageError> {
        Err(ImageError::PermissionDenied(
            "camera access is not available".into(),
        ))
    }
}

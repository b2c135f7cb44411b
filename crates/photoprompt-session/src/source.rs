//! Seams to the platform: picking an image and reading its bytes.

use async_trait::async_trait;
use photoprompt_common::{ImageError, ImageRef};
use tracing::debug;

/// Supplies images from the gallery or camera.
///
/// Implementations perform their own permission check first and return
/// `ImageError::PermissionDenied` when it is refused. `Ok(None)` means the
/// user cancelled the picker.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn select_from_gallery(&self) -> Result<Option<ImageRef>, ImageError>;
    async fn capture_from_camera(&self) -> Result<Option<ImageRef>, ImageError>;
}

/// Reads the bytes behind an [`ImageRef`].
#[async_trait]
pub trait ImageReader: Send + Sync {
    async fn read(&self, image: &ImageRef) -> Result<Vec<u8>, ImageError>;
}

/// Reads the locator as a local file path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageReader;

#[async_trait]
impl ImageReader for FileImageReader {
    async fn read(&self, image: &ImageRef) -> Result<Vec<u8>, ImageError> {
        let bytes = tokio::fs::read(image.locator()).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ImageError::PermissionDenied(format!("{}: {e}", image.locator()))
            } else {
                ImageError::ReadFailure(format!("{}: {e}", image.locator()))
            }
        })?;

        if bytes.is_empty() {
            return Err(ImageError::ReadFailure(format!(
                "{}: file is empty",
                image.locator()
            )));
        }

        debug!(image = %image.id(), size = bytes.len(), "read image bytes");
        Ok(bytes)
    }
}

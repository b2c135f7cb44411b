//! Captions synthesized from image metadata when the remote model is
//! unavailable.

use std::path::Path;

use chrono::NaiveDateTime;
use photoprompt_common::ImageRef;
use tracing::warn;

/// Used when the extension is not a known raster type.
pub const GALLERY_CAPTION: &str = "A photo in your gallery";

/// Used when the image reference cannot be inspected at all.
pub const LAST_RESORT_CAPTION: &str = "A photo you selected";

const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "heic", "heif"];

/// Build a caption from the image's extension and `now`.
///
/// Known raster extensions (case-insensitive) produce
/// `"An image captured on <M/D/YYYY> at <h:MM:SS AM>"`.
pub fn metadata_caption(image: &ImageRef, now: NaiveDateTime) -> String {
    match extension_of(image) {
        Ok(Some(ext)) if RASTER_EXTENSIONS.contains(&ext.as_str()) => format!(
            "An image captured on {} at {}",
            now.format("%-m/%-d/%Y"),
            now.format("%-I:%M:%S %p")
        ),
        Ok(_) => GALLERY_CAPTION.to_string(),
        Err(reason) => {
            warn!(image = %image.id(), %reason, "image metadata unavailable");
            LAST_RESORT_CAPTION.to_string()
        }
    }
}

/// Lowercased extension of the locator's final segment.
fn extension_of(image: &ImageRef) -> Result<Option<String>, String> {
    let name = image
        .file_name()
        .ok_or_else(|| format!("no file name in locator {:?}", image.locator()))?;
    Ok(Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase()))
}

//! Image handles shared by the providers and the session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::ImageId;

/// Where a selected image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageOrigin {
    Gallery,
    Camera,
}

impl fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageOrigin::Gallery => write!(f, "gallery"),
            ImageOrigin::Camera => write!(f, "camera"),
        }
    }
}

/// Opaque handle to one selected image.
///
/// Equality is by selection identity, not by locator: re-selecting the same
/// file yields a different `ImageRef`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    id: ImageId,
    locator: String,
    origin: ImageOrigin,
}

impl ImageRef {
    pub fn new(locator: impl Into<String>, origin: ImageOrigin) -> Self {
        Self {
            id: ImageId::new(),
            locator: locator.into(),
            origin,
        }
    }

    pub fn from_gallery(locator: impl Into<String>) -> Self {
        Self::new(locator, ImageOrigin::Gallery)
    }

    pub fn id(&self) -> &ImageId {
        &self.id
    }

    /// File path or URI the image bytes live at.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn origin(&self) -> ImageOrigin {
        self.origin
    }

    /// Final path segment of the locator, ignoring any query or fragment.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.locator.trim();
        let without_suffix = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or(trimmed);
        let name = without_suffix.rsplit(['/', '\\']).next()?;
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ImageRef {}

pub mod errors;
pub mod id;
pub mod image;
pub mod notifications;

pub use errors::{ConfigError, ImageError, PhotopromptError};
pub use id::{new_id, ImageId};
pub use image::{ImageOrigin, ImageRef};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};

pub type Result<T> = std::result::Result<T, PhotopromptError>;

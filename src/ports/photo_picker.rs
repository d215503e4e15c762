//! Photo Picker Port - Interface for the device photo picker.

use async_trait::async_trait;

use crate::domain::foundation::PhotoRef;

/// Port for picking a profile photo from the device.
#[async_trait]
pub trait PhotoPicker: Send + Sync {
    /// Opens the picker and waits for the user.
    ///
    /// Returns `Ok(None)` when the user cancels; cancellation causes no
    /// session state change.
    async fn pick_photo(&self) -> Result<Option<PhotoRef>, PhotoPickerError>;
}

/// Photo picker errors.
#[derive(Debug, thiserror::Error)]
pub enum PhotoPickerError {
    /// The platform picker could not be opened or crashed.
    #[error("photo picker unavailable: {0}")]
    Unavailable(String),

    /// The picked asset could not be read.
    #[error("picked photo unreadable: {0}")]
    Unreadable(String),
}

impl PhotoPickerError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

//! Canned Photo Picker Adapter

use async_trait::async_trait;

use crate::domain::foundation::PhotoRef;
use crate::ports::{PhotoPicker, PhotoPickerError};

#[derive(Debug, Clone)]
enum Canned {
    Photo(PhotoRef),
    Cancel,
    Fail(String),
}

/// Photo picker that returns a canned result.
#[derive(Debug, Clone)]
pub struct CannedPhotoPicker {
    canned: Canned,
}

impl CannedPhotoPicker {
    /// Always picks the given local URI.
    pub fn returning(uri: &str) -> Self {
        Self {
            canned: Canned::Photo(PhotoRef::new(uri).expect("non-empty canned uri")),
        }
    }

    /// Always behaves as if the user cancelled.
    pub fn cancelling() -> Self {
        Self { canned: Canned::Cancel }
    }

    /// Always fails to open.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { canned: Canned::Fail(message.into()) }
    }
}

#[async_trait]
impl PhotoPicker for CannedPhotoPicker {
    async fn pick_photo(&self) -> Result<Option<PhotoRef>, PhotoPickerError> {
        match &self.canned {
            Canned::Photo(photo) => Ok(Some(photo.clone())),
            Canned::Cancel => Ok(None),
            Canned::Fail(message) => Err(PhotoPickerError::unavailable(message.clone())),
        }
    }
}

//! Selected photos and the three-part request built from them.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::MeasureError;
use crate::view::View;

/// Whether a browser-reported media type is an image the intake accepts.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Build a `data:` URL that an `<img>` can show directly.
#[must_use]
pub fn preview_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// A photo chosen in one intake widget.
///
/// Bytes are shared so that cloning into reactive state stays cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
    pub preview: String,
}

impl SelectedImage {
    /// Wrap file contents and derive the preview URL.
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let media_type = media_type.into();
        let bytes = bytes.into();
        let preview = preview_data_url(&media_type, &bytes);
        Self { name: name.into(), media_type, bytes, preview }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The three photos of one measurement attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureRequest {
    pub front: SelectedImage,
    pub side: SelectedImage,
    pub standing: SelectedImage,
}

impl MeasureRequest {
    /// Assemble a request once every view has a photo.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::MissingImages`] naming every empty view.
    pub fn from_selections(
        front: Option<&SelectedImage>,
        side: Option<&SelectedImage>,
        standing: Option<&SelectedImage>,
    ) -> Result<Self, MeasureError> {
        match (front, side, standing) {
            (Some(front), Some(side), Some(standing)) => {
                Ok(Self { front: front.clone(), side: side.clone(), standing: standing.clone() })
            }
            _ => {
                let missing = [(View::Front, front), (View::Side, side), (View::Standing, standing)]
                    .into_iter()
                    .filter(|(_, image)| image.is_none())
                    .map(|(view, _)| view)
                    .collect();
                Err(MeasureError::MissingImages(missing))
            }
        }
    }

    /// Multipart parts in wire order.
    #[must_use]
    pub fn parts(&self) -> [(View, &SelectedImage); 3] {
        [(View::Front, &self.front), (View::Side, &self.side), (View::Standing, &self.standing)]
    }

    /// Total payload size across all parts.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.parts().iter().map(|(_, image)| image.size()).sum()
    }
}

//! Local state for one image intake widget.
//!
//! Each widget owns its drag highlight and preview. The selected image itself
//! is reported upward through an [`IntakeEvent`] so the page controller stays
//! the single owner of what gets submitted.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use record::{SelectedImage, is_image_media_type};

/// Selection change to report to the parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeEvent {
    Selected(SelectedImage),
    Cleared,
}

impl IntakeEvent {
    /// Value passed to the parent's selection callback.
    #[must_use]
    pub fn into_selection(self) -> Option<SelectedImage> {
        match self {
            Self::Selected(image) => Some(image),
            Self::Cleared => None,
        }
    }
}

/// Which drop-zone style to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropZoneLook {
    Empty,
    Dragging,
    Filled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeState {
    pub dragging: bool,
    pub preview: Option<String>,
}

impl IntakeState {

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// A drop landed on the zone; the highlight ends whether or not it held a usable file.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// A file was read from a drop or the picker. Images are shown and
    /// reported; anything else is ignored without feedback and leaves the
    /// current selection in place.
    pub fn receive(&mut self, image: SelectedImage) -> Option<IntakeEvent> {
        is_image_media_type(&image.media_type).then(|| self.loaded(image))
    }

    /// Show an image's preview and report it.
    pub fn loaded(&mut self, image: SelectedImage) -> IntakeEvent {
        self.preview = Some(image.preview.clone());
        IntakeEvent::Selected(image)
    }

    /// The remove control was pressed.
    pub fn remove(&mut self) -> IntakeEvent {
        self.clear();
        IntakeEvent::Cleared
    }

    /// Drop the preview without reporting, used when the parent cleared the selection.
    pub fn clear(&mut self) {
        self.preview = None;
    }

    #[must_use]
    pub fn look(&self) -> DropZoneLook {
        if self.dragging {
            DropZoneLook::Dragging
        } else if self.preview.is_some() {
            DropZoneLook::Filled
        } else {
            DropZoneLook::Empty
        }
    }
}

//! Page-controller state: the three selected photos and the request lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<MeasureState>` context by `app::App`. Intake
//! widgets write selections through callbacks, the measure page drives
//! `begin`/`complete` around the network call, and the results card reads the
//! stored record.
//!
//! Lifecycle: `Idle -> Loading -> {Success | Error}`, back to `Idle` on
//! `reset`, or straight to `Loading` again on a new measurement.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use record::{MeasureError, MeasureRequest, MeasurementRecord, SelectedImage, View};

use super::notice::{NoticeText, NoticeTone};

pub const MISSING_IMAGES_NOTICE: NoticeText = NoticeText {
    title: "Missing Images",
    description: "Please upload all three images before measuring.",
    tone: NoticeTone::Destructive,
};

pub const MEASURE_COMPLETE_NOTICE: NoticeText = NoticeText {
    title: "Measurement Complete",
    description: "Your body measurements have been estimated successfully.",
    tone: NoticeTone::Info,
};

pub const MEASURE_FAILED_NOTICE: NoticeText = NoticeText {
    title: "Measurement Failed",
    description: "Could not process the images. Please ensure all images are clear, well-lit, and show full body poses.",
    tone: NoticeTone::Destructive,
};

/// Lifecycle of the single measurement request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(MeasurementRecord),
    Error(String),
}

/// What the page should do after [`MeasureState::begin`].
#[derive(Clone, Debug, PartialEq)]
pub enum Begin {
    /// Send this request; state is now loading.
    Send(MeasureRequest),
    /// Selections are incomplete; raise [`MISSING_IMAGES_NOTICE`] and make no
    /// network call. Carries [`MeasureError::MissingImages`].
    Invalid(MeasureError),
    /// A request is already in flight.
    InFlight,
}

/// State owned by the page controller.
#[derive(Clone, Debug, Default)]
pub struct MeasureState {
    pub front: Option<SelectedImage>,
    pub side: Option<SelectedImage>,
    pub standing: Option<SelectedImage>,
    pub request: RequestState,
}

impl MeasureState {
    #[must_use]
    pub fn selection(&self, view: View) -> Option<&SelectedImage> {
        match view {
            View::Front => self.front.as_ref(),
            View::Side => self.side.as_ref(),
            View::Standing => self.standing.as_ref(),
        }
    }

    /// Replace or clear the photo for one view.
    pub fn set_selection(&mut self, view: View, image: Option<SelectedImage>) {
        let slot = match view {
            View::Front => &mut self.front,
            View::Side => &mut self.side,
            View::Standing => &mut self.standing,
        };
        *slot = image;
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        View::ALL.iter().all(|view| self.selection(*view).is_some())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading)
    }

    #[must_use]
    pub fn result(&self) -> Option<&MeasurementRecord> {
        match &self.request {
            RequestState::Success(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.request {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Validate selections and, if complete, enter the loading state.
    ///
    /// Entering loading drops any previous result or error. Validation
    /// failures leave the state untouched.
    pub fn begin(&mut self) -> Begin {
        if self.is_loading() {
            return Begin::InFlight;
        }
        match MeasureRequest::from_selections(self.front.as_ref(), self.side.as_ref(), self.standing.as_ref()) {
            Ok(request) => {
                self.request = RequestState::Loading;
                Begin::Send(request)
            }
            Err(err) => Begin::Invalid(err),
        }
    }

    /// Store the outcome of the request and return the notice to raise.
    ///
    /// Loading always ends here, whatever the outcome.
    pub fn complete(&mut self, outcome: Result<MeasurementRecord, MeasureError>) -> NoticeText {
        match outcome {
            Ok(record) => {
                self.request = RequestState::Success(record);
                MEASURE_COMPLETE_NOTICE
            }
            Err(err) => {
                self.request = RequestState::Error(err.to_string());
                MEASURE_FAILED_NOTICE
            }
        }
    }

    /// Clear selections, result, and error, returning to the upload view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

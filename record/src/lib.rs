//! Shared measurement model for the body-measure client and host.
//!
//! This crate owns everything that crosses the wire to the remote
//! pose-estimation service: the three photo views and their multipart field
//! names, the selected-image payload, the measurement record returned by the
//! service, and the error taxonomy of a measurement attempt. It has no browser
//! dependencies so every rule here is testable on the host.

pub mod error;
pub mod measurement;
pub mod upload;
pub mod view;

pub use error::MeasureError;
pub use measurement::{MEASUREMENT_FIELDS, MeasurementCard, MeasurementField, MeasurementRecord, MeasurementValue};
pub use upload::{MeasureRequest, SelectedImage, is_image_media_type, preview_data_url};
pub use view::View;

/// Remote endpoint that turns three photos into body measurements.
pub const MEASURE_ENDPOINT: &str = "https://anonymousananta-hybrid-pose-body-measurement.hf.space/measure_3pose";

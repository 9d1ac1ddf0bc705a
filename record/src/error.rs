//! Failure modes of a single measurement attempt.
//!
//! ERROR HANDLING
//! ==============
//! Every variant ends at the page controller, which turns it into an inline
//! message and a toast. Nothing here is fatal; the user can resubmit or reset.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::view::View;

/// Error produced while validating, sending, or decoding a measurement request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    /// Submission attempted before every view had an image.
    #[error("missing images: {}", join_views(.0))]
    MissingImages(Vec<View>),

    /// The endpoint could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("API request failed with status {0}")]
    Status(u16),

    /// The response body was not a valid measurement record.
    #[error("invalid response: {0}")]
    Decode(String),

    /// A browser API refused to build the request payload.
    #[error("browser error: {0}")]
    Browser(String),
}

fn join_views(views: &[View]) -> String {
    views.iter().map(|v| v.field_name()).collect::<Vec<_>>().join(", ")
}

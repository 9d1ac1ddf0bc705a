//! HTTP client for the remote measurement endpoint.
//!
//! Client-side (hydrate): a multipart `POST` via `gloo-net`.
//! Server-side (SSR): a stub returning an error since uploads only happen in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`MeasureError`] so the page controller can
//! store it and raise a single failure notice. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use record::{MeasureError, MeasureRequest, MeasurementRecord};

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> MeasureError {
    MeasureError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_summary(request: &MeasureRequest) -> String {
    let parts = request
        .parts()
        .iter()
        .map(|(view, image)| format!("{}={} ({} bytes)", view.field_name(), image.name, image.size()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{parts}; {} bytes total", request.total_bytes())
}

/// Send the three photos to the measurement endpoint and decode the reply.
///
/// # Errors
///
/// Returns [`MeasureError::Transport`] if the endpoint is unreachable,
/// [`MeasureError::Status`] on a non-2xx reply, [`MeasureError::Decode`] if the
/// body is not a measurement record, and [`MeasureError::Browser`] if the
/// multipart body cannot be built.
pub async fn submit_measurement(request: &MeasureRequest) -> Result<MeasurementRecord, MeasureError> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_form_data(request)?;
        log::info!("measure request: {}", request_summary(request));
        let resp = gloo_net::http::Request::post(record::MEASURE_ENDPOINT)
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let body = if resp.ok() { resp.text().await.map_err(transport_error)? } else { String::new() };
        log::info!("measure response: status {status}, {} bytes", body.len());
        MeasurementRecord::from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(MeasureError::Transport("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn build_form_data(request: &MeasureRequest) -> Result<web_sys::FormData, MeasureError> {
    use crate::util::file::{js_error, to_blob};

    let form = web_sys::FormData::new().map_err(js_error)?;
    for (view, image) in request.parts() {
        let blob = to_blob(image)?;
        form.append_with_blob_and_filename(view.field_name(), &blob, &image.name).map_err(js_error)?;
    }
    Ok(form)
}

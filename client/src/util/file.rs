//! Browser file helpers: reading picked files and turning them back into blobs.
//!
//! Hydrate-only; the SSR build never touches `File` or `Blob`.

use record::{MeasureError, SelectedImage};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Read a picked or dropped file into a [`SelectedImage`] with its preview.
///
/// # Errors
///
/// Returns [`MeasureError::Browser`] if the browser fails to read the file.
pub async fn read_selected_image(file: &web_sys::File) -> Result<SelectedImage, MeasureError> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedImage::new(file.name(), file.type_(), bytes))
}

/// Wrap an image's bytes in a `Blob` carrying its media type.
///
/// # Errors
///
/// Returns [`MeasureError::Browser`] if the `Blob` constructor throws.
pub fn to_blob(image: &SelectedImage) -> Result<web_sys::Blob, MeasureError> {
    let array = js_sys::Uint8Array::from(&image.bytes[..]);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&image.media_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

/// Convert a thrown JS value into a displayable error.
pub fn js_error(err: JsValue) -> MeasureError {
    MeasureError::Browser(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

use super::*;

fn image(name: &str) -> SelectedImage {
    SelectedImage::new(name, "image/png", vec![1_u8, 2, 3])
}

#[test]
fn media_type_gate_accepts_only_images() {
    assert!(is_image_media_type("image/jpeg"));
    assert!(is_image_media_type("image/webp"));
    assert!(!is_image_media_type("application/pdf"));
    assert!(!is_image_media_type(""));
    assert!(!is_image_media_type("text/image/png"));
}

#[test]
fn preview_is_base64_data_url() {
    assert_eq!(preview_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
}

#[test]
fn selected_image_derives_preview_and_size() {
    let img = SelectedImage::new("front.jpg", "image/jpeg", vec![0xff_u8, 0xd8]);
    assert_eq!(img.name, "front.jpg");
    assert_eq!(img.size(), 2);
    assert_eq!(img.preview, "data:image/jpeg;base64,/9g=");
}

#[test]
fn request_requires_all_three_views() {
    let front = image("f.png");
    let err = MeasureRequest::from_selections(Some(&front), None, None).unwrap_err();
    assert_eq!(err, MeasureError::MissingImages(vec![View::Side, View::Standing]));

    let err = MeasureRequest::from_selections(None, None, None).unwrap_err();
    assert_eq!(err, MeasureError::MissingImages(View::ALL.to_vec()));
}

#[test]
fn request_parts_are_in_wire_order() {
    let (front, side, standing) = (image("f.png"), image("s.png"), image("st.png"));
    let request = MeasureRequest::from_selections(Some(&front), Some(&side), Some(&standing)).unwrap();
    let parts: Vec<(&str, &str)> =
        request.parts().iter().map(|(view, img)| (view.field_name(), img.name.as_str())).collect();
    assert_eq!(parts, vec![("front", "f.png"), ("side", "s.png"), ("standing", "st.png")]);
    assert_eq!(request.total_bytes(), 9);
}

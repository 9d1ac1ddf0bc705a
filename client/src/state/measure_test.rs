use super::*;

fn image(name: &str) -> SelectedImage {
    SelectedImage::new(name, "image/jpeg", vec![7_u8; 4])
}

fn filled() -> MeasureState {
    let mut state = MeasureState::default();
    state.set_selection(View::Front, Some(image("front.jpg")));
    state.set_selection(View::Side, Some(image("side.jpg")));
    state.set_selection(View::Standing, Some(image("standing.jpg")));
    state
}

// =============================================================
// Defaults and selections
// =============================================================

#[test]
fn measure_state_default_is_idle_and_empty() {
    let state = MeasureState::default();
    assert_eq!(state.request, RequestState::Idle);
    assert!(!state.all_selected());
    assert!(!state.is_loading());
    assert!(state.result().is_none());
    assert!(state.error().is_none());
}

#[test]
fn set_selection_targets_one_view() {
    let mut state = MeasureState::default();
    state.set_selection(View::Side, Some(image("side.jpg")));
    assert!(state.selection(View::Front).is_none());
    assert_eq!(state.selection(View::Side).map(|i| i.name.as_str()), Some("side.jpg"));
    state.set_selection(View::Side, None);
    assert!(state.selection(View::Side).is_none());
}

#[test]
fn all_selected_requires_every_view() {
    let mut state = filled();
    assert!(state.all_selected());
    state.set_selection(View::Standing, None);
    assert!(!state.all_selected());
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_with_missing_view_makes_no_request() {
    for missing in View::ALL {
        let mut state = filled();
        state.set_selection(missing, None);
        assert_eq!(state.begin(), Begin::Invalid(MeasureError::MissingImages(vec![missing])));
        assert_eq!(state.request, RequestState::Idle);
    }
}

#[test]
fn begin_with_missing_view_keeps_previous_error() {
    let mut state = MeasureState { request: RequestState::Error("boom".to_owned()), ..MeasureState::default() };
    let Begin::Invalid(err) = state.begin() else {
        panic!("expected a validation failure");
    };
    assert_eq!(err.to_string(), "missing images: front, side, standing");
    assert_eq!(state.error(), Some("boom"));
    assert_eq!(MISSING_IMAGES_NOTICE.title, "Missing Images");
    assert_eq!(MISSING_IMAGES_NOTICE.tone, NoticeTone::Destructive);
}

#[test]
fn begin_enters_loading_and_builds_request() {
    let mut state = filled();
    let Begin::Send(request) = state.begin() else {
        panic!("expected a request");
    };
    assert!(state.is_loading());
    assert_eq!(request.front.name, "front.jpg");
    assert_eq!(request.side.name, "side.jpg");
    assert_eq!(request.standing.name, "standing.jpg");
}

#[test]
fn begin_clears_previous_error() {
    let mut state = filled();
    state.request = RequestState::Error("API request failed with status 502".to_owned());
    assert!(matches!(state.begin(), Begin::Send(_)));
    assert!(state.error().is_none());
}

#[test]
fn begin_while_loading_is_ignored() {
    let mut state = filled();
    assert!(matches!(state.begin(), Begin::Send(_)));
    assert_eq!(state.begin(), Begin::InFlight);
    assert!(state.is_loading());
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_success_stores_record() {
    let mut state = filled();
    state.begin();
    let record = MeasurementRecord::from_json(r#"{"estimated_height_cm": 172.3, "chest_cm": 95.0}"#).unwrap();
    let notice = state.complete(Ok(record.clone()));
    assert_eq!(notice, MEASURE_COMPLETE_NOTICE);
    assert!(!state.is_loading());
    assert_eq!(state.result(), Some(&record));
    assert!(state.error().is_none());
}

#[test]
fn complete_with_http_500_ends_in_error() {
    let mut state = filled();
    state.begin();
    let notice = state.complete(MeasurementRecord::from_response(500, ""));
    assert_eq!(notice, MEASURE_FAILED_NOTICE);
    assert!(!state.is_loading());
    assert!(state.result().is_none());
    assert!(state.error().is_some_and(|m| m.contains("500")));
}

#[test]
fn complete_with_transport_failure_shows_message() {
    let mut state = filled();
    state.begin();
    state.complete(Err(MeasureError::Transport("Failed to fetch".to_owned())));
    assert_eq!(state.error(), Some("Failed to fetch"));
    assert!(!state.is_loading());
}

#[test]
fn complete_with_bad_json_is_a_failure() {
    let mut state = filled();
    state.begin();
    let notice = state.complete(MeasurementRecord::from_response(200, "not json"));
    assert_eq!(notice, MEASURE_FAILED_NOTICE);
    assert!(state.error().is_some_and(|m| m.starts_with("invalid response")));
}

#[test]
fn failed_request_keeps_selections_for_retry() {
    let mut state = filled();
    state.begin();
    state.complete(Err(MeasureError::Status(503)));
    assert!(state.all_selected());
    assert!(matches!(state.begin(), Begin::Send(_)));
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_after_success_returns_to_upload() {
    let mut state = filled();
    state.begin();
    state.complete(Ok(MeasurementRecord::default()));
    state.reset();
    assert!(View::ALL.iter().all(|v| state.selection(*v).is_none()));
    assert!(state.result().is_none());
    assert_eq!(state.request, RequestState::Idle);
}

#[test]
fn reset_after_error_clears_everything() {
    let mut state = filled();
    state.begin();
    state.complete(Err(MeasureError::Status(500)));
    state.reset();
    assert!(!state.all_selected());
    assert!(state.error().is_none());
    assert_eq!(state.request, RequestState::Idle);
}

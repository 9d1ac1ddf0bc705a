use super::*;

// =============================================================
// Decoding
// =============================================================

#[test]
fn from_json_reads_known_fields() {
    let record = MeasurementRecord::from_json(r#"{"estimated_height_cm": 172.3, "chest_cm": 95.0}"#).unwrap();
    assert_eq!(record.estimated_height_cm, Some(MeasurementValue::Number(172.3)));
    assert_eq!(record.chest_cm, Some(MeasurementValue::Number(95.0)));
    assert_eq!(record.hip_cm, None);
    assert_eq!(record.warning, None);
}

#[test]
fn from_json_ignores_unknown_keys() {
    let record = MeasurementRecord::from_json(r#"{"hip_cm": 101, "waist_cm": 80, "debug": {"x": 1}}"#).unwrap();
    assert_eq!(record.hip_cm, Some(MeasurementValue::Number(101.0)));
    assert_eq!(record.cards().len(), 1);
}

#[test]
fn from_json_treats_null_as_absent() {
    let record = MeasurementRecord::from_json(r#"{"arm_length_cm": null, "warning": null}"#).unwrap();
    assert_eq!(record, MeasurementRecord::default());
}

#[test]
fn from_json_keeps_string_measurements() {
    let record = MeasurementRecord::from_json(r#"{"leg_length_cm": "N/A"}"#).unwrap();
    assert_eq!(record.leg_length_cm, Some(MeasurementValue::Text("N/A".to_owned())));
}

#[test]
fn from_json_rejects_invalid_json() {
    let err = MeasurementRecord::from_json("<html>oops</html>").unwrap_err();
    assert!(matches!(err, MeasureError::Decode(_)));
}

#[test]
fn from_json_rejects_non_object_bodies() {
    let err = MeasurementRecord::from_json("[172.3, 95.0]").unwrap_err();
    assert_eq!(err, MeasureError::Decode("expected a JSON object, got array".to_owned()));
}

#[test]
fn from_json_rejects_wrongly_typed_fields() {
    assert!(matches!(MeasurementRecord::from_json(r#"{"chest_cm": true}"#), Err(MeasureError::Decode(_))));
    assert!(matches!(MeasurementRecord::from_json(r#"{"warning": 3}"#), Err(MeasureError::Decode(_))));
}

// =============================================================
// Response status
// =============================================================

#[test]
fn from_response_maps_non_success_status() {
    let err = MeasurementRecord::from_response(500, "Internal Server Error").unwrap_err();
    assert_eq!(err, MeasureError::Status(500));
    assert!(err.to_string().contains("500"));
}

#[test]
fn from_response_checks_status_before_body() {
    let err = MeasurementRecord::from_response(404, r#"{"chest_cm": 90}"#).unwrap_err();
    assert_eq!(err, MeasureError::Status(404));
}

#[test]
fn from_response_decodes_success_body() {
    let record = MeasurementRecord::from_response(200, r#"{"warning": "Low confidence"}"#).unwrap();
    assert_eq!(record.warning_text(), Some("Low confidence"));
}

// =============================================================
// Cards
// =============================================================

#[test]
fn cards_for_height_and_chest() {
    let record = MeasurementRecord::from_json(r#"{"estimated_height_cm": 172.3, "chest_cm": 95.0}"#).unwrap();
    let cards = record.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].label, "Estimated Height");
    assert_eq!(cards[0].value, "172.3");
    assert_eq!(cards[0].unit, "cm");
    assert_eq!(cards[1].label, "Chest");
    assert_eq!(cards[1].value, "95.0");
    assert_eq!(record.warning_text(), None);
    assert_eq!(record.accuracy_text(), None);
}

#[test]
fn cards_follow_label_table_order() {
    let record = MeasurementRecord::from_json(
        r#"{"leg_length_cm": 90, "estimated_height_cm": 170, "shoulder_width_cm": 44.25}"#,
    )
    .unwrap();
    let labels: Vec<&str> = record.cards().iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Estimated Height", "Shoulder Width", "Leg Length"]);
    let values: Vec<String> = record.cards().into_iter().map(|c| c.value).collect();
    assert_eq!(values, vec!["170.0", "44.3", "90.0"]);
}

#[test]
fn cards_exclude_note_fields() {
    let record = MeasurementRecord::from_json(
        r#"{"accuracy_note": "within 3cm", "warning": "Low confidence", "hip_cm": 99.94}"#,
    )
    .unwrap();
    let cards = record.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].key, "hip_cm");
    assert_eq!(cards[0].value, "99.9");
    assert_eq!(record.accuracy_text(), Some("within 3cm"));
}

#[test]
fn text_values_are_shown_verbatim() {
    assert_eq!(MeasurementValue::Text("unknown".to_owned()).display(), "unknown");
    assert_eq!(MeasurementValue::Number(0.0).display(), "0.0");
}

#[test]
fn exact_ties_round_away_from_zero() {
    for (value, shown) in [(44.25, "44.3"), (0.25, "0.3"), (172.25, "172.3"), (95.75, "95.8"), (-44.25, "-44.3")] {
        assert_eq!(MeasurementValue::Number(value).display(), shown, "{value}");
    }
}

#[test]
fn near_ties_round_to_nearest() {
    for (value, shown) in [(0.05, "0.1"), (95.65, "95.7"), (1.45, "1.4"), (0.5, "0.5"), (99.94, "99.9")] {
        assert_eq!(MeasurementValue::Number(value).display(), shown, "{value}");
    }
}

#[test]
fn empty_notes_count_as_absent() {
    let record = MeasurementRecord {
        warning: Some(String::new()),
        accuracy_note: Some(String::new()),
        ..MeasurementRecord::default()
    };
    assert_eq!(record.warning_text(), None);
    assert_eq!(record.accuracy_text(), None);
}

#[test]
fn value_lookup_rejects_note_and_unknown_keys() {
    let record = MeasurementRecord { warning: Some("w".to_owned()), ..MeasurementRecord::default() };
    assert_eq!(record.value("warning"), None);
    assert_eq!(record.value("waist_cm"), None);
}

//! Measurement record returned by the pose-estimation service.
//!
//! DESIGN
//! ======
//! The record is decoded strictly: the body must be a JSON object, each
//! measurement must be a number, a string, or null, and the two notes must be
//! strings or null. Anything else is a [`MeasureError::Decode`] instead of a
//! half-rendered result. Unknown keys are ignored.

#[cfg(test)]
#[path = "measurement_test.rs"]
mod measurement_test;

use serde::Deserialize;
use serde_json::Value;

use crate::error::MeasureError;

/// A single measurement as sent by the service.
///
/// Numbers are the normal case. Strings are tolerated and shown verbatim.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    Number(f64),
    Text(String),
}

impl MeasurementValue {
    /// Text shown on a measurement card: one decimal place for numbers.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Number(value) => one_decimal(*value),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Body measurements estimated from the three photos. All fields are optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MeasurementRecord {
    #[serde(default)]
    pub estimated_height_cm: Option<MeasurementValue>,
    #[serde(default)]
    pub shoulder_width_cm: Option<MeasurementValue>,
    #[serde(default)]
    pub chest_cm: Option<MeasurementValue>,
    #[serde(default)]
    pub hip_cm: Option<MeasurementValue>,
    #[serde(default)]
    pub arm_length_cm: Option<MeasurementValue>,
    #[serde(default)]
    pub leg_length_cm: Option<MeasurementValue>,
    #[serde(default)]
    pub accuracy_note: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Display metadata for one measurement key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasurementField {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Fixed label table. Cards are rendered in this order.
pub const MEASUREMENT_FIELDS: [MeasurementField; 6] = [
    MeasurementField { key: "estimated_height_cm", label: "Estimated Height", icon: "\u{1F4CF}" },
    MeasurementField { key: "shoulder_width_cm", label: "Shoulder Width", icon: "\u{1F4AA}" },
    MeasurementField { key: "chest_cm", label: "Chest", icon: "\u{1F455}" },
    MeasurementField { key: "hip_cm", label: "Hip", icon: "\u{1F9CD}" },
    MeasurementField { key: "arm_length_cm", label: "Arm Length", icon: "\u{1F4AA}" },
    MeasurementField { key: "leg_length_cm", label: "Leg Length", icon: "\u{1F9B5}" },
];

/// One rendered measurement card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementCard {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl MeasurementRecord {
    /// Decode and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Decode`] if the body is not JSON, is not a JSON
    /// object, or holds a known field of the wrong type.
    pub fn from_json(body: &str) -> Result<Self, MeasureError> {
        let value: Value = serde_json::from_str(body).map_err(|e| MeasureError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Err(MeasureError::Decode(format!("expected a JSON object, got {}", kind_of(&value))));
        }
        serde_json::from_value(value).map_err(|e| MeasureError::Decode(e.to_string()))
    }

    /// Interpret a completed HTTP exchange with the measurement endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::Status`] for any non-2xx status, otherwise
    /// whatever [`MeasurementRecord::from_json`] reports.
    pub fn from_response(status: u16, body: &str) -> Result<Self, MeasureError> {
        if !(200..300).contains(&status) {
            return Err(MeasureError::Status(status));
        }
        Self::from_json(body)
    }

    /// Measurement value for a label-table key, if present.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&MeasurementValue> {
        match key {
            "estimated_height_cm" => self.estimated_height_cm.as_ref(),
            "shoulder_width_cm" => self.shoulder_width_cm.as_ref(),
            "chest_cm" => self.chest_cm.as_ref(),
            "hip_cm" => self.hip_cm.as_ref(),
            "arm_length_cm" => self.arm_length_cm.as_ref(),
            "leg_length_cm" => self.leg_length_cm.as_ref(),
            _ => None,
        }
    }

    /// Cards for every measurement present, in label-table order.
    #[must_use]
    pub fn cards(&self) -> Vec<MeasurementCard> {
        MEASUREMENT_FIELDS
            .iter()
            .filter_map(|field| {
                self.value(field.key).map(|value| MeasurementCard {
                    key: field.key,
                    label: field.label,
                    icon: field.icon,
                    value: value.display(),
                    unit: "cm",
                })
            })
            .collect()
    }

    /// Warning banner text. Empty strings count as absent.
    #[must_use]
    pub fn warning_text(&self) -> Option<&str> {
        non_empty(self.warning.as_deref())
    }

    /// Accuracy footer text. Empty strings count as absent.
    #[must_use]
    pub fn accuracy_text(&self) -> Option<&str> {
        non_empty(self.accuracy_note.as_deref())
    }
}

/// Format with one decimal place, rounding exact ties away from zero.
///
/// `{:.1}` rounds ties to even, so `44.25` would print as `44.2`. A double is
/// an exact tie at one decimal only when it ends in `.25` or `.75`, i.e. when
/// `4 * value` is an odd integer. Every other value is already rounded to the
/// nearest decimal by `{:.1}`.
#[allow(clippy::float_cmp)]
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{value:.1}")
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Field-level validation for inbound JSON payloads.
//!
//! Payloads are read from raw `serde_json::Value`s so every missing or mistyped field can be
//! reported with its path instead of failing on the first serde error.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

pub const REQUIRED: &str = "Required";

/// A single violation attached to the offending input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field violations for one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|error| error.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (index, error) in self.fields.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{} {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Closed set of string values carried on the wire.
pub trait WireEnum: Sized + Copy + PartialEq + 'static {
    const VARIANTS: &'static [Self];

    fn as_str(self) -> &'static str;

    fn from_wire(raw: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == raw)
    }

    fn expected() -> String {
        Self::VARIANTS
            .iter()
            .map(|variant| format!("'{}'", variant.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// `{ "status": "<variant>" }` body shared by job and application status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate<E> {
    pub status: E,
}

impl<E: WireEnum> StatusUpdate<E> {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let status = reader.required_enum::<E>("status");
        match status {
            Some(status) if reader.is_clean() => Ok(Self { status }),
            _ => Err(reader.into_errors()),
        }
    }
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

fn type_mismatch(expected: &str, found: &Value) -> String {
    format!("Expected {expected}, received {}", kind_of(found))
}

/// Cursor over a JSON object that records every violation it encounters.
pub struct PayloadReader<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a Value) -> Self {
        let mut errors = ValidationErrors::new();
        let object = match payload {
            Value::Object(map) => Some(map),
            other => {
                errors.push("", type_mismatch("object", other));
                None
            }
        };
        Self { object, errors }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.object
            .and_then(|map| map.get(field))
            .filter(|value| !value.is_null())
    }

    pub fn has(&self, field: &str) -> bool {
        self.object.is_some_and(|map| map.contains_key(field))
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(field, message);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn missing(&mut self, field: &str) {
        // A non-object payload already carries a root error.
        if self.object.is_some() {
            self.errors.push(field, REQUIRED);
        }
    }

    pub fn required_text(&mut self, field: &str) -> Option<String> {
        match self.value(field) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                self.errors.push(field, type_mismatch("string", other));
                None
            }
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.value(field) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                self.errors.push(field, type_mismatch("string", other));
                None
            }
            None => None,
        }
    }

    /// Tri-state read for partial updates: absent, explicit null, or a value.
    pub fn nullable_text(&mut self, field: &str) -> Option<Option<String>> {
        if !self.has(field) {
            return None;
        }
        match self.value(field) {
            None => Some(None),
            Some(Value::String(text)) => Some(Some(text.clone())),
            Some(other) => {
                self.errors.push(field, type_mismatch("string", other));
                None
            }
        }
    }

    pub fn required_integer(&mut self, field: &str) -> Option<u64> {
        match self.value(field) {
            Some(Value::Number(number)) => match number.as_u64() {
                Some(value) => Some(value),
                None => {
                    self.errors
                        .push(field, "Expected positive integer, received number");
                    None
                }
            },
            Some(other) => {
                self.errors.push(field, type_mismatch("integer", other));
                None
            }
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub fn required_bool(&mut self, field: &str) -> Option<bool> {
        match self.value(field) {
            Some(Value::Bool(flag)) => Some(*flag),
            Some(other) => {
                self.errors.push(field, type_mismatch("boolean", other));
                None
            }
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub fn required_enum<E: WireEnum>(&mut self, field: &str) -> Option<E> {
        match self.value(field) {
            Some(_) => self.optional_enum(field),
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub fn optional_enum<E: WireEnum>(&mut self, field: &str) -> Option<E> {
        match self.value(field) {
            Some(Value::String(raw)) => match E::from_wire(raw) {
                Some(variant) => Some(variant),
                None => {
                    self.errors.push(
                        field,
                        format!(
                            "Invalid enum value. Expected {}, received '{raw}'",
                            E::expected()
                        ),
                    );
                    None
                }
            },
            Some(other) => {
                self.errors.push(field, type_mismatch("string", other));
                None
            }
            None => None,
        }
    }

    /// Array of strings; absent or null reads as empty.
    pub fn text_list(&mut self, field: &str) -> Vec<String> {
        self.optional_text_list(field).unwrap_or_default()
    }

    pub fn optional_text_list(&mut self, field: &str) -> Option<Vec<String>> {
        match self.value(field) {
            Some(Value::Array(items)) => {
                let mut texts = Vec::with_capacity(items.len());
                let mut clean = true;
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(text) => texts.push(text.clone()),
                        other => {
                            clean = false;
                            self.errors
                                .push(&format!("{field}.{index}"), type_mismatch("string", other));
                        }
                    }
                }
                clean.then_some(texts)
            }
            Some(other) => {
                self.errors.push(field, type_mismatch("array", other));
                None
            }
            None => None,
        }
    }

    pub fn optional_timestamp(&mut self, field: &str) -> Option<DateTime<Utc>> {
        match self.value(field) {
            Some(Value::String(raw)) => match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(_) => {
                    self.errors.push(field, "Invalid date");
                    None
                }
            },
            Some(other) => {
                self.errors.push(field, type_mismatch("date string", other));
                None
            }
            None => None,
        }
    }

    /// Length check counted in characters; skipped when the field already failed.
    pub fn min_length(&mut self, field: &str, value: Option<&str>, min: usize, message: &str) {
        if let Some(value) = value {
            if value.chars().count() < min {
                self.errors.push(field, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shade {
        Light,
        Dark,
    }

    impl WireEnum for Shade {
        const VARIANTS: &'static [Self] = &[Shade::Light, Shade::Dark];

        fn as_str(self) -> &'static str {
            match self {
                Shade::Light => "light",
                Shade::Dark => "dark",
            }
        }
    }

    #[test]
    fn non_object_payload_reports_root_error_only() {
        let payload = json!(["not", "an", "object"]);
        let mut reader = PayloadReader::new(&payload);
        assert!(reader.required_text("name").is_none());
        let errors = reader.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(""), Some("Expected object, received array"));
    }

    #[test]
    fn null_counts_as_missing_for_required_fields() {
        let payload = json!({ "name": null });
        let mut reader = PayloadReader::new(&payload);
        assert!(reader.required_text("name").is_none());
        assert_eq!(reader.errors().message_for("name"), Some(REQUIRED));
    }

    #[test]
    fn enum_values_fail_closed() {
        let payload = json!({ "shade": "Dark", "other": "light" });
        let mut reader = PayloadReader::new(&payload);
        assert_eq!(reader.optional_enum::<Shade>("shade"), None);
        assert_eq!(reader.required_enum::<Shade>("other"), Some(Shade::Light));
        let message = reader.errors().message_for("shade").expect("shade rejected");
        assert!(message.contains("'light' | 'dark'"));
        assert!(message.contains("received 'Dark'"));
    }

    #[test]
    fn text_list_reports_item_paths() {
        let payload = json!({ "skills": ["rust", 7, "sql"] });
        let mut reader = PayloadReader::new(&payload);
        assert!(reader.text_list("skills").is_empty());
        assert_eq!(
            reader.errors().message_for("skills.1"),
            Some("Expected string, received number")
        );
    }

    #[test]
    fn nullable_text_distinguishes_absent_from_null() {
        let payload = json!({ "bio": null, "location": "Remote" });
        let mut reader = PayloadReader::new(&payload);
        assert_eq!(reader.nullable_text("bio"), Some(None));
        assert_eq!(
            reader.nullable_text("location"),
            Some(Some("Remote".to_string()))
        );
        assert_eq!(reader.nullable_text("resume"), None);
        assert!(reader.is_clean());
    }

    #[test]
    fn integers_must_be_non_negative_whole_numbers() {
        let payload = json!({ "a": 3, "b": -1, "c": 1.5, "d": "3" });
        let mut reader = PayloadReader::new(&payload);
        assert_eq!(reader.required_integer("a"), Some(3));
        assert_eq!(reader.required_integer("b"), None);
        assert_eq!(reader.required_integer("c"), None);
        assert_eq!(reader.required_integer("d"), None);
        assert_eq!(reader.errors().field_names(), vec!["b", "c", "d"]);
    }

    #[test]
    fn timestamps_parse_rfc3339() {
        let payload = json!({ "deadline": "2025-11-30T17:00:00Z", "bad": "next week" });
        let mut reader = PayloadReader::new(&payload);
        assert!(reader.optional_timestamp("deadline").is_some());
        assert!(reader.optional_timestamp("bad").is_none());
        assert_eq!(reader.errors().message_for("bad"), Some("Invalid date"));
    }

    #[test]
    fn display_lists_each_field() {
        let mut errors = ValidationErrors::single("username", REQUIRED);
        errors.push("password", "Password must be at least 6 characters");
        assert_eq!(
            errors.to_string(),
            "validation failed: username Required; password Password must be at least 6 characters"
        );
    }
}

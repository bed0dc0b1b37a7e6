//! Schema validation for résumé JSON
//!
//! Checks run in a fixed order and stop at the first violation:
//!
//! 1. the value is an object
//! 2. `name`, `location`, `phone`, `email` are non-empty strings
//! 3. every optional array field present is an array of the right element kind
//! 4. every section item carries its required fields and a well-formed
//!    `coursework`/`bullets` list
//!
//! Nested item fields are only checked for presence.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::model::Section;

/// Top-level fields that must be non-empty strings, in check order
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "location", "phone", "email"];

/// Key of the optional technical skills array
pub const SKILLS_FIELD: &str = "technicalSkills";

/// Résumé input as handed over by a caller: raw JSON text or a decoded value
#[derive(Debug, Clone, Copy)]
pub enum ResumeInput<'a> {
    Text(&'a str),
    Value(&'a Value),
}

impl<'a> From<&'a str> for ResumeInput<'a> {
    fn from(text: &'a str) -> Self {
        ResumeInput::Text(text)
    }
}

impl<'a> From<&'a String> for ResumeInput<'a> {
    fn from(text: &'a String) -> Self {
        ResumeInput::Text(text)
    }
}

/// A decoded JSON string is treated as JSON text, anything else as data
impl<'a> From<&'a Value> for ResumeInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => ResumeInput::Text(text),
            other => ResumeInput::Value(other),
        }
    }
}

/// Element kind expected inside an optional array field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Str,
    Dict,
}

impl ElementKind {
    fn name(self) -> &'static str {
        match self {
            ElementKind::Str => "str",
            ElementKind::Dict => "dict",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            ElementKind::Str => value.is_string(),
            ElementKind::Dict => value.is_object(),
        }
    }
}

/// Validate a decoded résumé value
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    let resume = value.as_object().ok_or(ValidationError::NotAnObject)?;

    check_required_fields(resume)?;
    check_array_fields(resume)?;

    for section in Section::ALL {
        if let Some(Value::Array(items)) = resume.get(section.key()) {
            check_section_items(section, items)?;
        }
    }

    Ok(())
}

/// Parse JSON text and validate it, returning the decoded value on success
pub fn validate_text(text: &str) -> Result<Value, ValidationError> {
    let value: Value = serde_json::from_str(text).map_err(ValidationError::InvalidJson)?;
    validate(&value)?;
    Ok(value)
}

/// Validate text or a decoded value, reporting `(valid, error message)`.
///
/// The message is empty when the résumé is valid.
///
/// ```rust
/// use resume_compiler::validate::validate_resume_json;
///
/// let (valid, error) = validate_resume_json(r#"{"name": "A", "location": "B", "phone": "C"}"#);
/// assert!(!valid);
/// assert_eq!(error, "Missing required field: 'email'");
/// ```
pub fn validate_resume_json<'a>(input: impl Into<ResumeInput<'a>>) -> (bool, String) {
    let outcome = match input.into() {
        ResumeInput::Text(text) => validate_text(text).map(|_| ()),
        ResumeInput::Value(value) => validate(value),
    };

    match outcome {
        Ok(()) => (true, String::new()),
        Err(err) => {
            debug!(error = %err, "resume failed validation");
            (false, err.to_string())
        }
    }
}

fn check_required_fields(resume: &Map<String, Value>) -> Result<(), ValidationError> {
    for field in REQUIRED_FIELDS {
        let value = resume
            .get(field)
            .ok_or(ValidationError::MissingField(field))?;
        match value.as_str() {
            Some(text) if !text.trim().is_empty() => {}
            _ => return Err(ValidationError::EmptyField(field)),
        }
    }
    Ok(())
}

fn check_array_fields(resume: &Map<String, Value>) -> Result<(), ValidationError> {
    let fields = std::iter::once((SKILLS_FIELD, ElementKind::Str)).chain(
        Section::ALL
            .into_iter()
            .map(|section| (section.key(), ElementKind::Dict)),
    );

    for (field, kind) in fields {
        let Some(value) = resume.get(field) else {
            continue;
        };
        let items = value.as_array().ok_or(ValidationError::NotAnArray(field))?;
        if let Some(index) = items.iter().position(|item| !kind.accepts(item)) {
            return Err(ValidationError::ItemType {
                field,
                index,
                expected: kind.name(),
            });
        }
    }
    Ok(())
}

fn check_section_items(section: Section, items: &[Value]) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        let Some(item) = item.as_object() else {
            continue;
        };

        if let Some(field) = section
            .required_fields()
            .iter()
            .copied()
            .find(|field| !item.contains_key(*field))
        {
            return Err(ValidationError::MissingItemField {
                section,
                index,
                field,
            });
        }

        match item.get(section.list_field()) {
            None => {}
            Some(Value::Array(entries)) => {
                if let Some(position) = entries.iter().position(|entry| !entry.is_string()) {
                    return Err(ValidationError::ListEntryNotString {
                        section,
                        index,
                        position,
                    });
                }
            }
            Some(_) => return Err(ValidationError::ListNotArray { section, index }),
        }
    }
    Ok(())
}

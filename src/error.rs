//! Error types for validation and compilation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::model::Section;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A single schema violation.
///
/// Validation stops at the first violation, so a failed check yields
/// exactly one of these. The `Display` text is the diagnostic reported to
/// callers and must stay stable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Raw input text is not syntactically valid JSON
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Resume data must be a JSON object (dictionary)")]
    NotAnObject,

    #[error("Missing required field: '{0}'")]
    MissingField(&'static str),

    /// Present but not a string, or blank after trimming
    #[error("Field '{0}' must be a non-empty string")]
    EmptyField(&'static str),

    #[error("Field '{0}' must be an array")]
    NotAnArray(&'static str),

    #[error("Item {index} in '{field}' must be a {expected}")]
    ItemType {
        field: &'static str,
        index: usize,
        expected: &'static str,
    },

    #[error("{} item {index} is missing required field: '{field}'", .section.item_label())]
    MissingItemField {
        section: Section,
        index: usize,
        field: &'static str,
    },

    /// `coursework` or `bullets` is present but not an array
    #[error("'{}' in {} item {index} must be an array", .section.list_field(), .section.item_noun())]
    ListNotArray { section: Section, index: usize },

    #[error(
        "{} {position} in {} item {index} must be a string",
        .section.list_entry_label(),
        .section.item_noun()
    )]
    ListEntryNotString {
        section: Section,
        index: usize,
        position: usize,
    },
}

/// Errors that can occur in the compile pipeline
///
/// The `Display` text of each variant is the message handed back to tool
/// callers, prefix included.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("JSON fails resume validation: {0}")]
    Validation(#[from] ValidationError),

    /// Decoded input that is neither an object nor JSON text
    #[error("Input must be a JSON string or dictionary, got {0}")]
    UnsupportedInput(&'static str),

    /// Validated data could not be turned into the typed model
    #[error("Error compiling resume: {0}")]
    Model(#[source] serde_json::Error),
}

/// Format a JSON decode error with source context using ariadne
pub fn format_json_error(source: &str, filename: &str, err: &serde_json::Error) -> String {
    let offset = char_offset(source, err.line(), err.column());
    let total = source.chars().count();
    let span: Span = offset..(offset + 1).min(total).max(offset);
    let message = format!("Invalid JSON format: {}", err);

    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, filename, offset)
        .with_message(&message)
        .with_label(
            Label::new((filename, span))
                .with_message(position_label(err))
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf);

    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("{}: {}\n", filename, message),
    }
}

/// Short label text for the offending position
fn position_label(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        serde_json::error::Category::Eof => "input ends here",
        serde_json::error::Category::Syntax => "unexpected input here",
        serde_json::error::Category::Data => "unexpected value here",
        serde_json::error::Category::Io => "read failed here",
    }
}

/// Convert serde_json's 1-based line/column into a char offset for ariadne
fn char_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut byte = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(byte) {
        byte -= 1;
    }
    source[..byte].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_messages_use_section_wording() {
        let err = ValidationError::MissingItemField {
            section: Section::Projects,
            index: 2,
            field: "dateRange",
        };
        assert_eq!(
            err.to_string(),
            "Project item 2 is missing required field: 'dateRange'"
        );

        let err = ValidationError::ListNotArray {
            section: Section::Education,
            index: 0,
        };
        assert_eq!(
            err.to_string(),
            "'coursework' in education item 0 must be an array"
        );

        let err = ValidationError::ListEntryNotString {
            section: Section::Publications,
            index: 1,
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Bullet 3 in publication item 1 must be a string"
        );
    }

    #[test]
    fn test_compile_error_prefixes() {
        let err = CompileError::from(ValidationError::MissingField("email"));
        assert_eq!(
            err.to_string(),
            "JSON fails resume validation: Missing required field: 'email'"
        );
        assert_eq!(
            CompileError::UnsupportedInput("array").to_string(),
            "Input must be a JSON string or dictionary, got array"
        );
    }

    #[test]
    fn test_char_offset_multiline() {
        let source = "{\n  \"a\": x\n}";
        // line 2, column 8 points at the `x`
        let offset = char_offset(source, 2, 8);
        assert_eq!(source.chars().nth(offset), Some('x'));
    }

    #[test]
    fn test_char_offset_clamps_past_end() {
        assert_eq!(char_offset("{", 5, 40), 1);
    }

    #[test]
    fn test_format_json_error_mentions_file() {
        let source = "{not json";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let report = format_json_error(source, "resume.json", &err);
        assert!(report.contains("resume.json"));
        assert!(report.contains("Invalid JSON format"));
    }
}

//! Resume Compiler - validate résumé JSON and render it as HTML
//!
//! This library provides a schema validator, an inline `**bold**` markup
//! expander, and an HTML renderer for structured résumé data.
//!
//! # Example
//!
//! ```rust
//! use resume_compiler::compile;
//!
//! let html = compile(r#"{
//!     "name": "Jane Doe",
//!     "location": "Austin, TX",
//!     "phone": "555-0100",
//!     "email": "jane@example.com"
//! }"#).unwrap();
//! assert!(html.contains("<h1>Jane Doe</h1>"));
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod renderer;
pub mod tools;
pub mod validate;

pub use config::{CompilerConfig, ConfigError};
pub use error::{CompileError, ValidationError};
pub use model::Resume;
pub use renderer::{render_html, HtmlConfig, HtmlTemplate};
pub use tools::{compile_resume, validate_resume, CompileReport, ValidationReport};
pub use validate::{validate_resume_json, ResumeInput};

use std::borrow::Cow;

use serde_json::Value;
use tracing::info;

/// Decode the input and check it against the résumé schema
pub fn check<'a>(input: impl Into<ResumeInput<'a>>) -> Result<(), CompileError> {
    let value = decode(input.into())?;
    validate::validate(&value)?;
    Ok(())
}

/// Compile résumé JSON to HTML with default configuration
///
/// This is the main entry point for the library. It decodes the input,
/// validates it, and renders the print template.
pub fn compile<'a>(input: impl Into<ResumeInput<'a>>) -> Result<String, CompileError> {
    compile_with_config(input, &HtmlConfig::default())
}

/// Compile résumé JSON to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use resume_compiler::{compile_with_config, HtmlConfig, HtmlTemplate};
/// use serde_json::json;
///
/// let resume = json!({"name": "A", "location": "B", "phone": "C", "email": "D"});
/// let config = HtmlConfig::new().with_template(HtmlTemplate::Interactive);
///
/// let html = compile_with_config(&resume, &config).unwrap();
/// assert!(html.contains("html2pdf"));
/// ```
pub fn compile_with_config<'a>(
    input: impl Into<ResumeInput<'a>>,
    config: &HtmlConfig,
) -> Result<String, CompileError> {
    let value = decode(input.into())?;
    validate::validate(&value)?;

    let resume = Resume::from_value(&value).map_err(CompileError::Model)?;
    let html = render_html(&resume, config);

    info!(
        template = config.template.name(),
        bytes = html.len(),
        "compiled resume"
    );
    Ok(html)
}

/// Turn caller input into a JSON value, borrowing decoded objects
fn decode(input: ResumeInput<'_>) -> Result<Cow<'_, Value>, CompileError> {
    match input {
        ResumeInput::Text(text) => serde_json::from_str(text)
            .map(Cow::Owned)
            .map_err(CompileError::InvalidJson),
        ResumeInput::Value(value @ Value::Object(_)) => Ok(Cow::Borrowed(value)),
        ResumeInput::Value(other) => Err(CompileError::UnsupportedInput(value_kind(other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

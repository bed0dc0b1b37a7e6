//! Boundary operations for a tool-transport layer
//!
//! Both operations accept raw JSON text or a decoded value and always
//! return a report; failures are described in `message`, never raised.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CompileError;
use crate::renderer::HtmlConfig;
use crate::validate::ResumeInput;

/// Message returned by [`validate_resume`] for a valid résumé
pub const VALID_MESSAGE: &str = "JSON is properly formatted and meets resume requirements.";

/// Message returned by [`compile_resume`] on success
pub const COMPILED_MESSAGE: &str = "Resume compiled successfully";

/// Result of [`validate_resume`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub message: String,
}

/// Result of [`compile_resume`]; `html` is `None` whenever `valid` is false
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub valid: bool,
    pub message: String,
    pub html: Option<String>,
}

/// Check that the input is well-formed JSON that meets the résumé schema
pub fn validate_resume<'a>(input: impl Into<ResumeInput<'a>>) -> ValidationReport {
    match crate::check(input) {
        Ok(()) => ValidationReport {
            valid: true,
            message: VALID_MESSAGE.to_string(),
        },
        Err(err) => {
            debug!(error = %err, "validate_resume rejected input");
            ValidationReport {
                valid: false,
                message: err.to_string(),
            }
        }
    }
}

/// Validate the input and, if valid, compile it into the default template
pub fn compile_resume<'a>(input: impl Into<ResumeInput<'a>>) -> CompileReport {
    compile_resume_with_config(input, &HtmlConfig::default())
}

/// Validate the input and, if valid, compile it with a custom configuration
pub fn compile_resume_with_config<'a>(
    input: impl Into<ResumeInput<'a>>,
    config: &HtmlConfig,
) -> CompileReport {
    match crate::compile_with_config(input, config) {
        Ok(html) => CompileReport {
            valid: true,
            message: COMPILED_MESSAGE.to_string(),
            html: Some(html),
        },
        Err(err) => {
            if matches!(err, CompileError::Model(_)) {
                warn!(error = %err, "validated resume failed to compile");
            } else {
                debug!(error = %err, "compile_resume rejected input");
            }
            CompileReport {
                valid: false,
                message: err.to_string(),
                html: None,
            }
        }
    }
}

//! Configuration for HTML rendering

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Document shell the résumé body is placed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlTemplate {
    /// Bare US-letter page, ready to print
    #[default]
    Print,
    /// Screen preview with a "Download PDF" button backed by html2pdf.js
    Interactive,
}

impl HtmlTemplate {
    pub fn name(self) -> &'static str {
        match self {
            HtmlTemplate::Print => "print",
            HtmlTemplate::Interactive => "interactive",
        }
    }
}

impl fmt::Display for HtmlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HtmlTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "print" => Ok(HtmlTemplate::Print),
            "interactive" => Ok(HtmlTemplate::Interactive),
            other => Err(format!(
                "unknown template '{}' (expected 'print' or 'interactive')",
                other
            )),
        }
    }
}

/// Configuration options for HTML output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Document shell to render into
    pub template: HtmlTemplate,
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document template
    pub fn with_template(mut self, template: HtmlTemplate) -> Self {
        self.template = template;
        self
    }
}

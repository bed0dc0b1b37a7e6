//! Compiler configuration loaded from TOML
//!
//! ```toml
//! [render]
//! template = "interactive"
//!
//! [output]
//! directory = "output"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{HtmlConfig, HtmlTemplate};

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub render: RenderSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub template: HtmlTemplate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Where compiled HTML goes when no explicit output path is given
    pub directory: Option<PathBuf>,
}

impl CompilerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Renderer settings
    pub fn html_config(&self) -> HtmlConfig {
        HtmlConfig::new().with_template(self.render.template)
    }

    /// Output file for an input file: `<directory>/<input stem>.html`
    ///
    /// Returns `None` when no output directory is configured.
    pub fn output_path(&self, input: &Path) -> Option<PathBuf> {
        let directory = self.output.directory.as_ref()?;
        let mut name = input.file_stem()?.to_os_string();
        name.push(".html");
        Some(directory.join(name))
    }
}

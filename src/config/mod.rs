#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use self::toml_config::TomlConfig;

pub const DEFAULT_LHS: i32 = 10;
pub const DEFAULT_RHS: i32 = 5;
pub const DEFAULT_NAME: &str = "世界";
pub const DEFAULT_SAMPLE_TEXT: &str = "你好世界";
pub const DEFAULT_INDENT: usize = 2;
pub const MAX_INDENT: usize = 16;

/// Resolved settings: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub lhs: i32,
    pub rhs: i32,
    pub name: String,
    pub sample_text: String,
    pub format: OutputFormat,
    pub indent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lhs: DEFAULT_LHS,
            rhs: DEFAULT_RHS,
            name: DEFAULT_NAME.to_string(),
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            format: OutputFormat::default(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            lhs: config.lhs().unwrap_or(defaults.lhs),
            rhs: config.rhs().unwrap_or(defaults.rhs),
            name: config.name().map(str::to_string).unwrap_or(defaults.name),
            sample_text: config
                .sample()
                .map(str::to_string)
                .unwrap_or(defaults.sample_text),
            format: config.format().unwrap_or(defaults.format),
            indent: config.indent().unwrap_or(defaults.indent),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("text.name", &self.name)?;
        validate_range("output.indent", self.indent, 0, MAX_INDENT)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn lhs(&self) -> i32 {
        self.lhs
    }

    fn rhs(&self) -> i32 {
        self.rhs
    }

    fn greeting_name(&self) -> &str {
        &self.name
    }

    fn sample_text(&self) -> &str {
        &self.sample_text
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

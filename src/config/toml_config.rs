use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub operands: Option<OperandsConfig>,
    pub text: Option<TextConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperandsConfig {
    pub lhs: Option<i32>,
    pub rhs: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextConfig {
    pub name: Option<String>,
    pub sample: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub indent: Option<usize>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// 替換環境變數 (例如 ${DEMO_NAME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn lhs(&self) -> Option<i32> {
        self.operands.as_ref().and_then(|o| o.lhs)
    }

    pub fn rhs(&self) -> Option<i32> {
        self.operands.as_ref().and_then(|o| o.rhs)
    }

    pub fn name(&self) -> Option<&str> {
        self.text.as_ref().and_then(|t| t.name.as_deref())
    }

    pub fn sample(&self) -> Option<&str> {
        self.text.as_ref().and_then(|t| t.sample.as_deref())
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn indent(&self) -> Option<usize> {
        self.output.as_ref().and_then(|o| o.indent)
    }
}

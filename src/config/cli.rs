use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-demo")]
#[command(about = "Calculator and string utility demo")]
pub struct CliConfig {
    /// Left operand [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub lhs: Option<i32>,

    /// Right operand [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub rhs: Option<i32>,

    /// Name to greet [default: 世界]
    #[arg(long)]
    pub name: Option<String>,

    /// Text whose length is reported [default: 你好世界]
    #[arg(long)]
    pub text: Option<String>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Indentation of result lines in text output [default: 2]
    #[arg(long)]
    pub indent: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併配置檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        let file_settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Settings::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Settings::default(),
        };
        Ok(self.apply_overrides(file_settings))
    }

    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(lhs) = self.lhs {
            settings.lhs = lhs;
        }
        if let Some(rhs) = self.rhs {
            settings.rhs = rhs;
        }
        if let Some(name) = &self.name {
            settings.name = name.clone();
        }
        if let Some(text) = &self.text {
            settings.sample_text = text.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(indent) = self.indent {
            settings.indent = indent;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_operands() {
        let cli = CliConfig::parse_from(["calc-demo", "--lhs", "-3", "--rhs", "0", "-f", "json"]);
        assert_eq!(cli.lhs, Some(-3));
        assert_eq!(cli.rhs, Some(0));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_no_flags_resolves_to_defaults() {
        let cli = CliConfig::parse_from(["calc-demo"]);
        assert_eq!(cli.resolve().unwrap(), Settings::default());
    }

    #[test]
    fn test_overrides_only_touch_given_flags() {
        let cli = CliConfig::parse_from(["calc-demo", "--name", "Rust"]);
        let base = Settings {
            rhs: 0,
            ..Settings::default()
        };
        let merged = cli.apply_overrides(base);
        assert_eq!(merged.name, "Rust");
        assert_eq!(merged.rhs, 0);
        assert_eq!(merged.lhs, 10);
    }
}

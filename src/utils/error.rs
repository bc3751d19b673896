use thiserror::Error;

/// Errors raised by the arithmetic unit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Output error ({format}): {message}")]
    OutputError { format: String, message: String },

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::SerializationError(_)
            | DemoError::CsvError(_)
            | DemoError::OutputError { .. } => ErrorCategory::Output,
            DemoError::TomlParseError(_) | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the config file exists and is readable",
            DemoError::SerializationError(_)
            | DemoError::CsvError(_)
            | DemoError::OutputError { .. } => "Try a different --format, e.g. text",
            DemoError::TomlParseError(_) => "Make sure the config file is valid TOML",
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line or in the config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("讀取檔案失敗: {}", e),
            DemoError::SerializationError(e) => format!("JSON 輸出失敗: {}", e),
            DemoError::CsvError(e) => format!("CSV 輸出失敗: {}", e),
            DemoError::OutputError { format, message } => {
                format!("{} 輸出失敗: {}", format, message)
            }
            DemoError::TomlParseError(e) => format!("配置檔格式錯誤: {}", e),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置值無效 ({}): {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

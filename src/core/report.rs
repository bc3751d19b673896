use crate::core::text::print_greeting;
use crate::domain::model::{DemoReport, Outcome};
use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn render(report: &DemoReport, format: OutputFormat, indent: usize) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(report, indent),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

fn into_utf8(format: OutputFormat, data: Vec<u8>) -> Result<String> {
    String::from_utf8(data).map_err(|e| DemoError::OutputError {
        format: format.as_str().to_string(),
        message: format!("output is not valid UTF-8: {}", e),
    })
}

pub fn render_text(report: &DemoReport, indent: usize) -> Result<String> {
    let pad = " ".repeat(indent);
    let mut out = Vec::new();

    writeln!(out, "=== {} ===", report.title)?;
    writeln!(out)?;

    writeln!(out, "计算器测试:")?;
    for calc in &report.calculations {
        writeln!(out, "{}{}", pad, calc)?;
    }
    writeln!(out)?;

    writeln!(out, "工具函数测试:")?;
    print_greeting(&mut out, &report.greeting_name, indent)?;
    writeln!(out, "{}字符串长度: {}", pad, report.sample_text_length)?;
    writeln!(out)?;

    writeln!(out, "程序运行完成!")?;

    into_utf8(OutputFormat::Text, out)
}

pub fn render_json(report: &DemoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One row per calculation; failed rows leave `result` empty.
pub fn render_csv(report: &DemoReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["operation", "lhs", "rhs", "result", "error"])?;

    for calc in &report.calculations {
        let (result, error) = match &calc.outcome {
            Outcome::Failed(message) => (String::new(), message.clone()),
            other => (other.to_string(), String::new()),
        };
        writer.write_record([
            calc.operation.name().to_string(),
            calc.lhs.to_string(),
            calc.rhs.to_string(),
            result,
            error,
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| DemoError::IoError(e.into_error()))?;
    into_utf8(OutputFormat::Csv, data)
}

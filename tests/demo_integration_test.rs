use calc_demo::config::toml_config::TomlConfig;
use calc_demo::core::report::{render, render_text};
use calc_demo::{Calculator, DemoReport, DemoRunner, Operation, OutputFormat, Outcome, Settings};
use std::io::Write;
use tempfile::NamedTempFile;

fn run(settings: Settings) -> DemoReport {
    DemoRunner::new(Calculator::new(), settings).run()
}

#[test]
fn test_default_demo_text_output() {
    let report = run(Settings::default());
    let text = render_text(&report, 2).unwrap();

    let expected = "\
=== 多文件项目演示 ===

计算器测试:
  10 + 5 = 15
  10 - 5 = 5
  10 * 5 = 50
  10 / 5 = 2

工具函数测试:
  你好, 世界!
  字符串长度: 4

程序运行完成!
";
    assert_eq!(text, expected);
}

#[test]
fn test_json_output_round_trips_report() {
    let report = run(Settings {
        rhs: 0,
        ..Settings::default()
    });
    let json = render(&report, OutputFormat::Json, 0).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let calculations = value["calculations"].as_array().unwrap();
    assert_eq!(calculations.len(), 4);
    assert_eq!(calculations[0]["operation"], "add");
    assert_eq!(calculations[0]["outcome"]["value"], 10);
    assert_eq!(calculations[3]["outcome"]["kind"], "failed");

    let parsed: DemoReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.calculations[3].operation, Operation::Divide);
    assert!(parsed.calculations[3].outcome.is_failed());
    assert_eq!(parsed.sample_text_length, 4);
}

#[test]
fn test_csv_output_has_header_and_four_rows() {
    let report = run(Settings::default());
    let csv = render(&report, OutputFormat::Csv, 0).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["operation", "lhs", "rhs", "result", "error"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[2][3], "50");
    assert_eq!(&rows[3][3], "2");
    assert_eq!(&rows[3][4], "");
}

#[test]
fn test_settings_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[operands]
lhs = 7
rhs = 2

[text]
name = "Rust"
sample = "crate"

[output]
format = "json"
"#
    )
    .unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    let settings = Settings::from_toml(&config);
    assert_eq!(settings.format, OutputFormat::Json);

    let report = run(settings);
    assert_eq!(report.calculations[3].outcome, Outcome::Float(3.5));
    assert_eq!(report.greeting, "你好, Rust!");
    assert_eq!(report.sample_text_length, 5);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TomlConfig::from_file(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(calc_demo::DemoError::IoError(_))));
}

#[cfg(feature = "cli")]
#[test]
fn test_cli_flags_override_config_file() {
    use clap::Parser;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[operands]\nlhs = 1\nrhs = 1\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = calc_demo::CliConfig::parse_from(["calc-demo", "--config", path.as_str(), "--rhs", "0"]);
    let settings = cli.resolve().unwrap();
    assert_eq!(settings.lhs, 1);
    assert_eq!(settings.rhs, 0);

    let report = run(settings);
    assert_eq!(report.failed_count(), 1);
}

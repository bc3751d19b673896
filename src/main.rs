use calc_demo::core::report;
use calc_demo::utils::error::DemoError;
use calc_demo::utils::{logger, validation::Validate};
use calc_demo::{Calculator, CliConfig, ConfigProvider, DemoRunner};
use clap::Parser;
use std::io::Write;

fn exit_with(e: &DemoError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting calc-demo");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let format = settings.output_format();
    let indent = settings.indent();
    let runner = DemoRunner::new(Calculator::new(), settings);
    let report_data = runner.run();

    let rendered = match report::render(&report_data, format, indent) {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
    {
        exit_with(&DemoError::IoError(e));
    }

    tracing::info!("✅ Demo completed");
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::Settings;

pub use core::calculator::{add, divide, multiply, subtract, Calculator};
pub use core::demo::DemoRunner;
pub use core::report::OutputFormat;
pub use core::text::{greeting, print_greeting, string_length};
pub use domain::model::{Calculation, DemoReport, Operation, Outcome};
pub use domain::ports::{Arithmetic, ConfigProvider};
pub use utils::error::{CalcError, DemoError, Result};

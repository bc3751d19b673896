pub mod calculator;
pub mod demo;
pub mod report;
pub mod text;

pub use crate::domain::model::{Calculation, DemoReport, Operation, Outcome};
pub use crate::domain::ports::{Arithmetic, ConfigProvider};
pub use crate::utils::error::Result;

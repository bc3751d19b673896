use crate::core::report::OutputFormat;
use crate::domain::model::{Operation, Outcome};
use crate::utils::error::CalcError;

/// The four arithmetic operations over `i32`.
pub trait Arithmetic: Send + Sync {
    fn add(&self, a: i32, b: i32) -> i32;
    fn subtract(&self, a: i32, b: i32) -> i32;
    fn multiply(&self, a: i32, b: i32) -> i32;
    fn divide(&self, a: i32, b: i32) -> Result<f64, CalcError>;

    fn apply(&self, operation: Operation, a: i32, b: i32) -> Result<Outcome, CalcError> {
        let outcome = match operation {
            Operation::Add => Outcome::Integer(self.add(a, b)),
            Operation::Subtract => Outcome::Integer(self.subtract(a, b)),
            Operation::Multiply => Outcome::Integer(self.multiply(a, b)),
            Operation::Divide => Outcome::Float(self.divide(a, b)?),
        };
        Ok(outcome)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn lhs(&self) -> i32;
    fn rhs(&self) -> i32;
    fn greeting_name(&self) -> &str;
    fn sample_text(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn indent(&self) -> usize;
}

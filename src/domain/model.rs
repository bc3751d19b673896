use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Display order used by the demo.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

/// Result of one operation. `Failed` means no numeric result is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Outcome {
    Integer(i32),
    Float(f64),
    Failed(String),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(v) => write!(f, "{}", v),
            Outcome::Float(v) => write!(f, "{}", v),
            Outcome::Failed(message) => write!(f, "error: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub lhs: i32,
    pub rhs: i32,
    pub outcome: Outcome,
}

impl Calculation {
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.operation.symbol(), self.rhs)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.outcome)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    pub title: String,
    pub lhs: i32,
    pub rhs: i32,
    pub calculations: Vec<Calculation>,
    pub greeting_name: String,
    pub greeting: String,
    pub sample_text: String,
    pub sample_text_length: usize,
    pub generated_at: DateTime<Utc>,
}

impl DemoReport {
    pub fn failed_count(&self) -> usize {
        self.calculations
            .iter()
            .filter(|c| c.outcome.is_failed())
            .count()
    }
}

use crate::core::text::{greeting, string_length};
use crate::domain::model::{Calculation, DemoReport, Operation, Outcome};
use crate::domain::ports::{Arithmetic, ConfigProvider};
use chrono::Utc;

pub const DEMO_TITLE: &str = "多文件项目演示";

pub struct DemoRunner<A: Arithmetic, C: ConfigProvider> {
    arithmetic: A,
    config: C,
}

impl<A: Arithmetic, C: ConfigProvider> DemoRunner<A, C> {
    pub fn new(arithmetic: A, config: C) -> Self {
        Self { arithmetic, config }
    }

    pub fn calculate(&self, operation: Operation) -> Calculation {
        let (lhs, rhs) = (self.config.lhs(), self.config.rhs());

        let outcome = match self.arithmetic.apply(operation, lhs, rhs) {
            Ok(outcome) => {
                tracing::debug!("{} {} {} = {}", lhs, operation.symbol(), rhs, outcome);
                outcome
            }
            Err(e) => {
                // 記錄為 Failed，無數值結果
                tracing::warn!("{} failed: {}", operation.name(), e);
                Outcome::Failed(e.to_string())
            }
        };

        Calculation {
            operation,
            lhs,
            rhs,
            outcome,
        }
    }

    pub fn run(&self) -> DemoReport {
        tracing::info!(
            "Running calculator demo with operands {} and {}",
            self.config.lhs(),
            self.config.rhs()
        );

        let calculations: Vec<Calculation> = Operation::ALL
            .iter()
            .map(|op| self.calculate(*op))
            .collect();

        let sample_text = self.config.sample_text().to_string();
        let sample_text_length = string_length(&sample_text);
        tracing::debug!("Sample text '{}' has {} chars", sample_text, sample_text_length);

        let report = DemoReport {
            title: DEMO_TITLE.to_string(),
            lhs: self.config.lhs(),
            rhs: self.config.rhs(),
            calculations,
            greeting_name: self.config.greeting_name().to_string(),
            greeting: greeting(self.config.greeting_name()),
            sample_text,
            sample_text_length,
            generated_at: Utc::now(),
        };

        let failed = report.failed_count();
        if failed > 0 {
            tracing::warn!("{} of {} calculations had no result", failed, report.calculations.len());
        } else {
            tracing::info!("All {} calculations succeeded", report.calculations.len());
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::calculator::Calculator;

    fn settings(lhs: i32, rhs: i32) -> Settings {
        Settings {
            lhs,
            rhs,
            ..Settings::default()
        }
    }

    #[test]
    fn test_default_operands() {
        let runner = DemoRunner::new(Calculator, Settings::default());
        let report = runner.run();

        let outcomes: Vec<Outcome> = report.calculations.iter().map(|c| c.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Integer(15),
                Outcome::Integer(5),
                Outcome::Integer(50),
                Outcome::Float(2.0),
            ]
        );
        assert_eq!(report.greeting, "你好, 世界!");
        assert_eq!(report.sample_text_length, 4);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_zero_divisor_only_fails_divide() {
        let runner = DemoRunner::new(Calculator, settings(10, 0));
        let report = runner.run();

        assert_eq!(report.failed_count(), 1);
        let divide = &report.calculations[3];
        assert_eq!(divide.operation, Operation::Divide);
        assert_eq!(
            divide.outcome,
            Outcome::Failed("division by zero: 10 / 0".to_string())
        );
        assert_eq!(report.calculations[0].outcome, Outcome::Integer(10));
    }
}

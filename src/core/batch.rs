use crate::core::splitter::split_statements;
use crate::db::{StatementExecutor, StatementOutput};

#[derive(Debug, Clone)]
pub struct StatementSuccess {
    pub index: usize,
    pub statement: String,
    pub output: StatementOutput,
}

#[derive(Debug, Clone)]
pub struct StatementFailure {
    pub index: usize,
    pub statement: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub total: usize,
    pub successes: Vec<StatementSuccess>,
    pub failures: Vec<StatementFailure>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.successes.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Splits `input` and executes the statements strictly in order. Outcomes
/// are keyed by the statement's 1-based position; a failed statement is
/// recorded and the remaining statements still run.
pub async fn run_batch(executor: &dyn StatementExecutor, input: &str) -> BatchReport {
    let statements = split_statements(input);
    let mut report = BatchReport {
        total: statements.len(),
        successes: Vec::new(),
        failures: Vec::new(),
    };

    for (position, statement) in statements.into_iter().enumerate() {
        let index = position + 1;
        match executor.execute(&statement).await {
            Ok(output) => report.successes.push(StatementSuccess {
                index,
                statement,
                output,
            }),
            Err(err) => {
                tracing::debug!(index, error = %err, "statement failed");
                report.failures.push(StatementFailure {
                    index,
                    statement,
                    error: err.to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ExecError;
    use async_trait::async_trait;

    struct ScriptedExecutor;

    #[async_trait]
    impl StatementExecutor for ScriptedExecutor {
        async fn execute(&self, statement: &str) -> Result<StatementOutput, ExecError> {
            if statement.contains("boom") {
                Err(ExecError("line 1: syntax error".to_string()))
            } else if statement.starts_with("SELECT") {
                Ok(StatementOutput::Rows {
                    columns: vec!["device_id".to_string()],
                    rows: Vec::new(),
                })
            } else {
                Ok(StatementOutput::Applied)
            }
        }
    }

    #[tokio::test]
    async fn outcomes_are_keyed_by_one_based_position() {
        let report = run_batch(&ScriptedExecutor, "SELECT 1; INSERT INTO t (a) VALUES (1);").await;

        assert_eq!(report.total, 2);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 0);
        assert!(report.all_succeeded());
        assert_eq!(report.successes[0].index, 1);
        assert_eq!(report.successes[1].index, 2);
        assert!(matches!(report.successes[0].output, StatementOutput::Rows { .. }));
        assert!(matches!(report.successes[1].output, StatementOutput::Applied));
    }

    #[tokio::test]
    async fn a_failure_does_not_abort_the_batch() {
        let report = run_batch(&ScriptedExecutor, "SELECT 1; boom; SELECT 2;").await;

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_succeeded());
        assert_eq!(report.failures[0].index, 2);
        assert_eq!(report.failures[0].statement, "boom");
        assert_eq!(report.failures[0].error, "line 1: syntax error");
        assert_eq!(report.successes[1].index, 3);
    }

    #[tokio::test]
    async fn blank_input_yields_an_empty_report() {
        let report = run_batch(&ScriptedExecutor, "  \n ").await;

        assert_eq!(report.total, 0);
        assert!(report.successes.is_empty());
        assert!(report.failures.is_empty());
        assert!(report.all_succeeded());
    }

    #[tokio::test]
    async fn quoted_semicolons_reach_the_executor_intact() {
        let report = run_batch(&ScriptedExecutor, "SELECT ';' FROM t;").await;

        assert_eq!(report.total, 1);
        assert_eq!(report.successes[0].statement, "SELECT ';' FROM t");
    }
}

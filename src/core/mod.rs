pub mod batch;
pub mod splitter;

pub use batch::{run_batch, BatchReport, StatementFailure, StatementSuccess};
pub use splitter::split_statements;

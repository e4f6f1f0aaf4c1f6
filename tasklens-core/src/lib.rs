//! tasklens-core: task aggregation and status-report engine.
//!
//! The report pipeline is remote-first: a generative model produces the
//! summary when a credential is configured, and the deterministic composer
//! in this crate takes over whenever the remote strategy is missing or
//! fails. Everything here is pure and synchronous; network concerns live in
//! the strategy crates.

pub mod analyzer;
pub mod overdue;
pub mod report;
pub mod stats;
pub mod task;

pub use analyzer::{Summarizer, analyze, local_report};
pub use overdue::{is_overdue, parse_due_date};
pub use report::compose;
pub use stats::{TaskStats, aggregate};
pub use task::{AnalysisInput, Priority, Task, TaskStatus, UserInfo};

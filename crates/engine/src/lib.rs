//! # Rankwatch Engine
//!
//! Request-validation engine for promotion request forms posted as
//! structured messages in a channel.
//!
//! ## Architecture
//!
//! ```text
//! Trigger (message created / channel opened)
//!     │
//!     ├──> Scheduler (debounce, supersession)
//!     │
//!     └──> RequestChecker
//!          ├─> skip rules (channel, kind, panel shape, already decided)
//!          ├─> member resolution via the injected Gateway
//!          ├─> pure field checks (identity, rank)
//!          ├─> report link resolution (cache fast path, bounded fetch)
//!          └─> single annotation write when any label changed
//! ```
//!
//! All field-level failures are absorbed into verdicts; only unexpected
//! gateway failures reach the operator log.

mod checker;
mod config;
mod error;
mod gateway;
pub mod pattern;
pub mod reaction;
mod report;
mod scheduler;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use checker::{RequestChecker, RunMode, RunStats};
pub use config::{CheckerConfig, FieldLabels};
pub use error::{EngineError, GatewayError, Result};
pub use gateway::Gateway;
pub use report::check_report;
pub use scheduler::{CheckScheduler, Trigger};

//! Completion action invoked with the validated form value

mod log_sink;

pub use log_sink::{LogSink, SubmissionRecord};

use crate::validation::FormValue;
use anyhow::Result;
use async_trait::async_trait;

/// Receives the validated value on a successful submit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send {
    async fn complete(&mut self, value: &FormValue) -> Result<()>;
}

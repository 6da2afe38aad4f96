//! Diagnostic sink: logs accepted submissions and keeps them for stdout

use super::SubmissionSink;
use crate::validation::FormValue;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// One accepted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub value: FormValue,
}

impl SubmissionRecord {
    pub fn new(value: FormValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            value,
        }
    }
}

#[derive(Debug, Default)]
pub struct LogSink {
    log_path: Option<PathBuf>,
    records: Vec<SubmissionRecord>,
}

impl LogSink {
    pub fn new(log_path: Option<PathBuf>) -> Self {
        Self {
            log_path,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    async fn append_line(&self, record: &SubmissionRecord) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("opening submission log {}", path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn complete(&mut self, value: &FormValue) -> Result<()> {
        let record = SubmissionRecord::new(value.clone());
        let json = serde_json::to_string(&record.value)?;
        tracing::info!(submission = %record.id, bills = value.bills.len(), "form submitted: {json}");

        self.append_line(&record).await?;
        self.records.push(record);
        Ok(())
    }
}

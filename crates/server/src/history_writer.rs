//! Fire-and-forget persistence of history records.
//!
//! Actions enqueue records and return without awaiting the write. A single
//! background task drains the channel; failed writes land in a dead-letter
//! log entry carrying the serialized record and are never retried. Counters
//! make both outcomes observable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use db::{AnalysisHistoryRepository, PromptHistoryRepository};
use promptforge_core::{AnalysisRecord, PromptRecord};
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryWrite {
    Prompt(PromptRecord),
    Analysis(AnalysisRecord),
}

#[derive(Clone)]
pub struct HistoryWriter {
    sender: mpsc::UnboundedSender<HistoryWrite>,
    written: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

impl HistoryWriter {
    pub fn spawn(prompts: PromptHistoryRepository, analyses: AnalysisHistoryRepository) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<HistoryWrite>();
        let written = Arc::new(AtomicUsize::new(0));
        let failed = Arc::new(AtomicUsize::new(0));

        let task_written = written.clone();
        let task_failed = failed.clone();

        tokio::spawn(async move {
            while let Some(write) = receiver.recv().await {
                let result = match &write {
                    HistoryWrite::Prompt(record) => prompts.create(record).await,
                    HistoryWrite::Analysis(record) => analyses.create(record).await,
                };

                match result {
                    Ok(()) => {
                        task_written.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        task_failed.fetch_add(1, Ordering::Relaxed);
                        let record =
                            serde_json::to_string(&write).unwrap_or_else(|_| "<unserializable>".to_string());
                        tracing::error!(error = %e, %record, "history write failed, record dropped");
                    }
                }
            }
        });

        Self {
            sender,
            written,
            failed,
        }
    }

    /// Hand a record to the background task. Never blocks and never reports
    /// failure to the caller; a closed channel only leaves a log entry.
    pub fn enqueue(&self, write: HistoryWrite) {
        if self.sender.send(write).is_err() {
            tracing::error!("history writer task is gone, record dropped");
        }
    }

    pub fn written_count(&self) -> usize {
        self.written.load(Ordering::Relaxed)
    }

    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}

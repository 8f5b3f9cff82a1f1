use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::path::Path;

use crate::config::RUN_LOG_BUFFER_SIZE;
use crate::error::{write_file, ReportError};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum RunEventKind {
    RunStarted {
        run_id: String,
        demo: bool,
    },
    RunnerStarted {
        label: String,
        command: String,
    },
    RunnerCompleted {
        label: String,
        success: bool,
        exit_code: Option<i32>,
        duration_secs: f64,
        output_bytes: usize,
    },
    ArtifactWritten {
        target: String,
        path: String,
    },
    MockGenerated {
        targets: Vec<String>,
    },
    ReportGenerated {
        path: String,
        overall_percentage: u32,
    },
    RunFinished {
        run_id: String,
        runners_failed: usize,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct RunEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: RunEventKind,
}

/// Bounded, in-order log of what one `run` did.
pub struct RunLog {
    events: VecDeque<RunEvent>,
}

impl RunLog {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(RUN_LOG_BUFFER_SIZE),
        }
    }

    pub fn emit(&mut self, kind: RunEventKind) {
        if self.events.len() >= RUN_LOG_BUFFER_SIZE {
            self.events.pop_front();
        }
        self.events.push_back(RunEvent {
            timestamp: Utc::now(),
            kind,
        });
    }

    pub fn events(&self) -> impl Iterator<Item = &RunEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(&self.events)?;
        write_file(path, json)
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gowatch::errors::{GowatchError, Result};
use gowatch::exec::{CommandOutput, ExecutorBackend, Invocation};
use tokio::time::Instant;

/// One recorded execution.
#[derive(Debug, Clone)]
pub struct ExecutionRecord {
    pub invocation: Invocation,
    pub started: Instant,
    pub finished: Instant,
}

/// A fake executor that:
/// - records every invocation with start/finish instants
/// - optionally takes `run_time` to "execute" (via `tokio::time::sleep`)
/// - optionally fails with a non-zero exit on the N-th run (1-based)
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    records: Arc<Mutex<Vec<ExecutionRecord>>>,
    run_time: Duration,
    fail_on_run: Option<usize>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run_time(mut self, run_time: Duration) -> Self {
        self.run_time = run_time;
        self
    }

    pub fn failing_on_run(mut self, run: usize) -> Self {
        self.fail_on_run = Some(run);
        self
    }

    /// Shared view of the records; stays valid after the executor is moved.
    pub fn records(&self) -> Arc<Mutex<Vec<ExecutionRecord>>> {
        Arc::clone(&self.records)
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl ExecutorBackend for RecordingExecutor {
    fn execute(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        let records = Arc::clone(&self.records);
        let run_time = self.run_time;
        let fail_on_run = self.fail_on_run;

        Box::pin(async move {
            let started = Instant::now();
            if !run_time.is_zero() {
                tokio::time::sleep(run_time).await;
            }
            let finished = Instant::now();

            let run = {
                let mut guard = records.lock().unwrap();
                guard.push(ExecutionRecord {
                    invocation: invocation.clone(),
                    started,
                    finished,
                });
                guard.len()
            };

            if fail_on_run == Some(run) {
                return Err(GowatchError::CommandFailed {
                    command: invocation.to_string(),
                    code: 1,
                });
            }

            Ok(CommandOutput {
                stdout: format!("run {run}"),
            })
        })
    }
}

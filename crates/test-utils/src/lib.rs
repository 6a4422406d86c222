//! Shared helpers for gowatch's integration tests.

pub mod builders;
pub mod fake_executor;

use std::future::Future;
use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gowatch::engine::HandoffReceiver;
use tokio::task::JoinHandle;
use tracing_subscriber::{EnvFilter, fmt};

use crate::fake_executor::ExecutionRecord;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Output shows up only for failing tests (or with `--nocapture`); the
/// filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `fut`, failing the test if it takes more than five seconds.
///
/// Under a paused clock the limit is virtual time, so it only trips when the
/// future is genuinely stuck.
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(5), fut)
        .await
        .expect("future did not finish within 5s")
}

/// Drain a hand-off receiver in the background, counting tokens.
pub fn count_handoffs(mut rx: HandoffReceiver) -> (Arc<AtomicUsize>, JoinHandle<()>) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = {
        let count = Arc::clone(&count);
        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                count.fetch_add(1, Ordering::SeqCst);
            }
        })
    };
    (count, handle)
}

/// Assert that no two recorded executions overlap in time.
pub fn assert_sequential(records: &[ExecutionRecord]) {
    for pair in records.windows(2) {
        assert!(
            pair[1].started >= pair[0].finished,
            "execution started at {:?} before previous finished at {:?}",
            pair[1].started,
            pair[0].finished
        );
    }
}

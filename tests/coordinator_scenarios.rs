mod common;
use crate::common::{
    RecordingExecutor, TARGET, WatchConfigBuilder, assert_sequential, init_tracing, with_timeout,
};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use gowatch::engine::Coordinator;
use gowatch::errors::{GowatchError, Result as GowatchResult};
use gowatch::fs::mock::MockFileSystem;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

type TestResult = Result<(), Box<dyn Error>>;

/// Start a coordinator whose shutdown "signal" is a oneshot.
fn start(
    fs: &MockFileSystem,
    executor: &RecordingExecutor,
    builder: WatchConfigBuilder,
) -> (oneshot::Sender<()>, JoinHandle<GowatchResult<()>>) {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let coordinator = Coordinator::new(builder.build(), Arc::new(fs.clone()), executor.clone());
    let handle = tokio::spawn(async move {
        coordinator
            .run_until(async move {
                let _ = stop_rx.await;
                Ok(())
            })
            .await
    });
    (stop_tx, handle)
}

fn watched_file() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file(TARGET, 100);
    fs
}

#[tokio::test(start_paused = true)]
async fn unchanged_file_for_three_cycles_runs_once() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new();
    let (stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(executor.count(), 1);

    let _ = stop.send(());
    with_timeout(handle).await??;
    assert_eq!(executor.count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn one_size_change_runs_twice() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new();
    let (stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    // Polls at t = 0, 1, 2 see nothing; the change lands before t = 3.
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    fs.resize(TARGET, 120);
    tokio::time::sleep(Duration::from_secs(3)).await;

    let _ = stop.send(());
    with_timeout(handle).await??;
    assert_eq!(executor.count(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn changes_during_a_run_collapse_into_one_rerun() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new().with_run_time(Duration::from_millis(2_500));
    let (stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    // First run occupies t = 0..2.5; both edits fall between the polls at 1 and 2.
    tokio::time::sleep(Duration::from_millis(1_200)).await;
    fs.resize(TARGET, 110);
    tokio::time::sleep(Duration::from_millis(400)).await;
    fs.touch(TARGET);
    tokio::time::sleep(Duration::from_millis(6_400)).await;

    let _ = stop.send(());
    with_timeout(handle).await??;

    let records = executor.records();
    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_sequential(&records);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failing_command_stops_everything() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new().failing_on_run(1);
    let (_stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    let res = with_timeout(handle).await?;
    assert!(matches!(res, Err(GowatchError::CommandFailed { .. })));

    let stats = fs.stat_count();
    fs.resize(TARGET, 1);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(fs.stat_count(), stats, "watcher kept polling after a fatal error");
    assert_eq!(executor.count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn shutdown_while_waiting_exits_cleanly() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new();
    let (stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    let _ = stop.send(());
    with_timeout(handle).await??;

    // An edit after shutdown must not trigger anything.
    fs.resize(TARGET, 7);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(executor.count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn deleted_file_is_fatal() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new();
    let (_stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    fs.remove(TARGET);

    let res = with_timeout(handle).await?;
    assert!(matches!(res, Err(GowatchError::StatFailed { .. })));
    assert_eq!(executor.count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn missing_file_fails_before_any_run() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    let executor = RecordingExecutor::new();
    let (_stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    let res = with_timeout(handle).await?;
    assert!(matches!(res, Err(GowatchError::StatFailed { .. })));
    assert_eq!(executor.count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn once_mode_runs_a_single_time_without_watching() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    let executor = RecordingExecutor::new();
    let (_stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET).once());

    with_timeout(handle).await??;
    assert_eq!(executor.count(), 1);
    assert_eq!(fs.stat_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn shutdown_mid_run_returns_only_after_the_run_finishes() -> TestResult {
    init_tracing();
    let fs = watched_file();
    let executor = RecordingExecutor::new().with_run_time(Duration::from_secs(2));
    let (stop, handle) = start(&fs, &executor, WatchConfigBuilder::new(TARGET));

    tokio::time::sleep(Duration::from_millis(500)).await;
    let _ = stop.send(());
    with_timeout(handle).await??;

    let returned_at = tokio::time::Instant::now();
    let records = executor.records();
    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].finished <= returned_at);
    Ok(())
}

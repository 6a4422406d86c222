#![allow(dead_code)]

pub use gowatch_test_utils::builders::WatchConfigBuilder;
pub use gowatch_test_utils::fake_executor::{ExecutionRecord, RecordingExecutor};
pub use gowatch_test_utils::{assert_sequential, count_handoffs, init_tracing, with_timeout};

pub const TARGET: &str = "/work/app/main.go";

use std::path::PathBuf;
use std::time::Duration;

use gowatch::config::WatchConfig;

/// Builder for `WatchConfig` with test-friendly defaults:
/// `go run /w/main.go`, polled every second, watching mode.
pub struct WatchConfigBuilder {
    config: WatchConfig,
}

impl WatchConfigBuilder {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            config: WatchConfig {
                toolchain: "go".to_string(),
                command: "run".to_string(),
                target: target.into(),
                poll_interval: Duration::from_secs(1),
                once: false,
            },
        }
    }

    pub fn toolchain(mut self, program: &str) -> Self {
        self.config.toolchain = program.to_string();
        self
    }

    pub fn command(mut self, command: &str) -> Self {
        self.config.command = command.to_string();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn once(mut self) -> Self {
        self.config.once = true;
        self
    }

    pub fn build(self) -> WatchConfig {
        self.config
    }
}

use std::time::Duration;

pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

/// Where the reporter publishes; the results viewer binds this socket.
pub const SINK_ENDPOINT: &str = "ipc:///tmp/mocha_tbpl_reporter_sink";

/// Longest a single send may wait on a sink that stopped reading.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(5);

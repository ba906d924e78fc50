use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported endpoint '{0}', expected ipc://<path>")]
    Endpoint(String),

    #[error("Cannot connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("Cannot encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// Publisher was used after `close`.
    #[error("Publisher is closed")]
    Closed,

    #[error("Cannot load manifest: {0}")]
    Manifest(#[from] config::ConfigError),

    /// The run was stopped before its `end` event.
    #[error("Run interrupted")]
    Interrupted,
}

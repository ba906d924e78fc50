//! Publishes test-run lifecycle events as TBPL status messages.
//!
//! A runner drives a [`RunObserver`](runner::RunObserver); the
//! [`TbplReporter`](reporter::TbplReporter) turns each callback into one
//! [`Message`](reporter::message::Message) and hands it to a
//! [`Publisher`](connection::Publisher), which writes JSON lines to the sink at
//! [`SINK_ENDPOINT`](configuration::constants::SINK_ENDPOINT).

#[macro_use]
extern crate log;

pub mod configuration;
pub mod connection;
pub mod error;
pub mod reporter;
pub mod runner;

pub use self::error::{Error, Result};
pub use self::reporter::TbplReporter;

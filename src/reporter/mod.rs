//! Translates runner lifecycle callbacks into TBPL status messages.
//!
//! One test file is one top-level suite. Every named suite announces itself
//! with `test_start`, but only suites directly under the root close with a
//! `test_end`, so nested suites are folded into their file's result.

pub mod message;
pub mod sanitize;

use crate::connection::{Publisher, Transport};
use crate::error::Result;
use crate::runner::{EventSource, RunObserver, TestNode};
use derivative::*;

use self::message::{Message, Status};
use self::sanitize::sanitize;

#[cfg(unix)]
use crate::configuration::constants::SINK_ENDPOINT;
#[cfg(unix)]
use crate::connection::{Endpoint, IpcTransport};

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct TbplReporter<T: Transport> {
    /// Outcome of the most recent test event; last write wins.
    status: Status,
    publisher: Publisher<T>,
}

#[cfg(unix)]
impl TbplReporter<IpcTransport> {
    /// Connects to the sink and registers a reporter with `runner`. Nothing is
    /// registered when the sink cannot be reached.
    pub fn attach<R: EventSource + ?Sized>(runner: &mut R) -> Result<()> {
        let endpoint = SINK_ENDPOINT.parse::<Endpoint>()?;
        let publisher = Publisher::connect(&endpoint)?;
        Self::attach_with(runner, publisher);
        Ok(())
    }
}

impl<T: Transport + 'static> TbplReporter<T> {
    pub fn attach_with<R: EventSource + ?Sized>(runner: &mut R, publisher: Publisher<T>) {
        runner.subscribe(Box::new(Self::new(publisher)));
    }
}

impl<T: Transport> TbplReporter<T> {
    pub fn new(publisher: Publisher<T>) -> Self {
        Self {
            status: Status::Pass,
            publisher,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn report_test(&mut self, test: &dyn TestNode, status: Status, expected: Option<Status>) -> Result<()> {
        self.status = status;
        self.publisher.send(&Message::TestStatus {
            test: resolve_file(test),
            subtest: display_title(test),
            status,
            expected,
        })
    }
}

impl<T: Transport> RunObserver for TbplReporter<T> {
    fn on_suite(&mut self, suite: &dyn TestNode) -> Result<()> {
        if suite.is_root() {
            return Ok(());
        }
        self.publisher.send(&Message::TestStart {
            test: resolve_file(suite),
        })
    }

    fn on_suite_end(&mut self, suite: &dyn TestNode) -> Result<()> {
        if !suite.parent().map_or(false, |parent| parent.is_root()) {
            return Ok(());
        }
        let test = resolve_file(suite);
        debug!("{} finished with {}", test.as_deref().unwrap_or("<unknown file>"), self.status);
        self.publisher.send(&Message::TestEnd {
            test,
            status: self.status,
            expected: self.status.expected(),
        })
    }

    fn on_pass(&mut self, test: &dyn TestNode) -> Result<()> {
        self.report_test(test, Status::Pass, None)
    }

    fn on_fail(&mut self, test: &dyn TestNode, reason: &str) -> Result<()> {
        debug!("'{}' failed: {}", test.full_title(), reason);
        self.report_test(test, Status::Fail, Some(Status::Pass))
    }

    fn on_pending(&mut self, test: &dyn TestNode) -> Result<()> {
        self.report_test(test, Status::NotRun, None)
    }

    fn on_end(&mut self) -> Result<()> {
        self.publisher.send(&Message::SuiteEnd)?;
        self.publisher.send(&Message::Fin)?;
        self.publisher.close()
    }
}

/// The nearest file found walking from `node` up through its parents.
pub fn resolve_file(node: &dyn TestNode) -> Option<String> {
    let mut current = Some(node);
    while let Some(node) = current {
        if let Some(file) = node.file() {
            return Some(file.to_owned());
        }
        current = node.parent();
    }
    None
}

pub fn display_title(node: &dyn TestNode) -> String {
    sanitize(&node.full_title()).into_owned()
}

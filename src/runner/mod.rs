//! Contract between a test runner and the observers it reports to.
//!
//! The runner owns the execution tree; observers only borrow nodes for the
//! duration of one callback.

pub mod manifest_runner;
pub mod node;

pub use self::manifest_runner::ManifestRunner;
pub use self::node::{Suite, Test};

use crate::error::Result;

/// A node of the execution tree: a test, a suite, or the implicit root suite.
pub trait TestNode {
    fn title(&self) -> &str;

    /// Originating source file, absent on synthetic nodes.
    fn file(&self) -> Option<&str>;

    fn parent(&self) -> Option<&dyn TestNode>;

    fn is_root(&self) -> bool {
        false
    }

    /// Titles from the outermost suite down to this node, joined by a space.
    /// The root suite contributes nothing.
    fn full_title(&self) -> String {
        let mut titles = Vec::new();
        if !self.is_root() {
            titles.push(self.title());
        }
        let mut current = self.parent();
        while let Some(node) = current {
            if !node.is_root() {
                titles.push(node.title());
            }
            current = node.parent();
        }
        titles.reverse();
        titles.join(" ")
    }
}

/// Lifecycle callbacks a runner dispatches, in order, on a single thread.
///
/// An error returned from any callback aborts the dispatch and surfaces to
/// whoever drives the runner.
pub trait RunObserver {
    fn on_suite(&mut self, suite: &dyn TestNode) -> Result<()>;
    fn on_suite_end(&mut self, suite: &dyn TestNode) -> Result<()>;
    fn on_pass(&mut self, test: &dyn TestNode) -> Result<()>;
    fn on_fail(&mut self, test: &dyn TestNode, reason: &str) -> Result<()>;
    fn on_pending(&mut self, test: &dyn TestNode) -> Result<()>;
    fn on_end(&mut self) -> Result<()>;
}

/// A runner that observers can be registered with.
pub trait EventSource {
    fn subscribe(&mut self, observer: Box<dyn RunObserver>);
}

use crate::configuration::manifest::{Manifest, Outcome, SuiteEntry};
use crate::error::{Error, Result};
use crate::runner::{EventSource, RunObserver, Suite, Test};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const NO_REASON: &str = "no failure message recorded";

/// Replays a recorded run manifest, dispatching lifecycle events to every
/// subscribed observer in the order a live runner would.
pub struct ManifestRunner<'m> {
    manifest: &'m Manifest,
    observers: Vec<Box<dyn RunObserver>>,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<'m> ManifestRunner<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            observers: Vec::new(),
            interrupted: None,
        }
    }

    /// Stops the walk with `Error::Interrupted` before the next event once
    /// `flag` is raised. No `end` is dispatched after an interruption.
    pub fn interrupt_on(&mut self, flag: Arc<AtomicBool>) {
        self.interrupted = Some(flag);
    }

    /// Walks the manifest under an implicit root suite. The first observer
    /// error stops the walk and is returned.
    pub fn run(&mut self) -> Result<()> {
        let manifest = self.manifest;
        info!("Starting run '{}'", manifest.name);
        info!("Replaying {} tests to {} observers", manifest.test_count(), self.observers.len());
        let root = Suite::root();
        self.dispatch(|o| o.on_suite(&root))?;
        for entry in &manifest.suites {
            self.run_suite(entry, &root)?;
        }
        self.dispatch(|o| o.on_suite_end(&root))?;
        self.dispatch(|o| o.on_end())?;
        info!("Run '{}' finished", manifest.name);
        Ok(())
    }

    fn run_suite(&mut self, entry: &SuiteEntry, parent: &Suite<'_>) -> Result<()> {
        let suite = Suite::new(&entry.title, entry.file.as_deref(), parent);
        debug!("Suite '{}'", entry.title);
        self.dispatch(|o| o.on_suite(&suite))?;
        for test_entry in &entry.tests {
            let test = Test::new(&test_entry.title, test_entry.file.as_deref(), &suite);
            trace!("Test '{}' {:?}", test_entry.title, test_entry.outcome);
            match test_entry.outcome {
                Outcome::Pass => self.dispatch(|o| o.on_pass(&test))?,
                Outcome::Fail => {
                    let reason = test_entry.message.as_deref().unwrap_or(NO_REASON);
                    self.dispatch(|o| o.on_fail(&test, reason))?
                }
                Outcome::Pending => self.dispatch(|o| o.on_pending(&test))?,
            }
        }
        for child in &entry.suites {
            self.run_suite(child, &suite)?;
        }
        self.dispatch(|o| o.on_suite_end(&suite))
    }

    fn dispatch<F>(&mut self, mut event: F) -> Result<()>
    where
        F: FnMut(&mut dyn RunObserver) -> Result<()>,
    {
        if let Some(flag) = &self.interrupted {
            if flag.load(Ordering::SeqCst) {
                warn!("Run '{}' interrupted", self.manifest.name);
                return Err(Error::Interrupted);
            }
        }
        for observer in self.observers.iter_mut() {
            event(observer.as_mut())?;
        }
        Ok(())
    }
}

impl<'m> EventSource for ManifestRunner<'m> {
    fn subscribe(&mut self, observer: Box<dyn RunObserver>) {
        self.observers.push(observer);
    }
}

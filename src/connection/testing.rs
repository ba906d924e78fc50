use crate::connection::{SendMessage, Transport};
use crate::error::{Error, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Frame(Value),
    Close,
}

/// In-memory transport that keeps every frame and close call in one log.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    log: Rc<RefCell<Vec<Recorded>>>,
    fail_after: Option<usize>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `frames` frames, then refuses every later send.
    pub fn failing_after(frames: usize) -> Self {
        Self {
            log: Rc::default(),
            fail_after: Some(frames),
        }
    }

    pub fn log(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }

    pub fn frames(&self) -> Vec<Value> {
        self.log
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                Recorded::Frame(value) => Some(value.clone()),
                Recorded::Close => None,
            })
            .collect()
    }

    pub fn close_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|entry| **entry == Recorded::Close)
            .count()
    }
}

impl<'a> SendMessage<&'a [u8], Result<()>> for RecordingTransport {
    fn send(&mut self, data: &'a [u8]) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.frames().len() >= limit {
                return Err(Error::Transport(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "sink went away",
                )));
            }
        }
        assert_eq!(data.last(), Some(&b'\n'), "frame must end with a newline");
        let value = serde_json::from_slice(&data[..data.len() - 1])?;
        self.log.borrow_mut().push(Recorded::Frame(value));
        Ok(())
    }
}

impl Transport for RecordingTransport {
    fn close(self) -> Result<()> {
        self.log.borrow_mut().push(Recorded::Close);
        Ok(())
    }
}

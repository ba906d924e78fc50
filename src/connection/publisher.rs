use crate::connection::{SendMessage, Transport};
use crate::error::{Error, Result};
use crate::reporter::message::Message;
use derivative::*;

#[cfg(unix)]
use crate::connection::{Endpoint, IpcTransport};

/// Owns one outbound channel and writes each message to it as a single JSON
/// line, in call order.
///
/// The channel is released by [`Publisher::close`]. A publisher that is dropped
/// without being closed releases it on drop.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Publisher<T: Transport> {
    endpoint: String,
    #[derivative(Debug = "ignore")]
    transport: Option<T>,
    sent: u64,
}

#[cfg(unix)]
impl Publisher<IpcTransport> {
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let transport = IpcTransport::connect(endpoint)?;
        info!("Connected to sink {}", endpoint);
        Ok(Self::with_transport(endpoint.to_string(), transport))
    }
}

impl<T: Transport> Publisher<T> {
    pub fn with_transport<S: Into<String>>(endpoint: S, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport: Some(transport),
            sent: 0,
        }
    }

    pub fn send(&mut self, message: &Message) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(Error::Closed)?;
        let mut frame = serde_json::to_vec(message)?;
        frame.push(b'\n');
        trace!("Frame {}", String::from_utf8_lossy(&frame).trim_end());
        transport.send(frame.as_slice())?;
        self.sent += 1;
        debug!("Sent '{}' to {}", message.action(), self.endpoint);
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        let transport = self.transport.take().ok_or(Error::Closed)?;
        transport.close()?;
        info!("Closed {} after {} messages", self.endpoint, self.sent);
        Ok(())
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    #[cfg(test)]
    pub fn sent(&self) -> u64 {
        self.sent
    }
}

impl<T: Transport> Drop for Publisher<T> {
    fn drop(&mut self) {
        if let Some(transport) = self.transport.take() {
            warn!("Publisher for {} dropped before close, releasing", self.endpoint);
            if let Err(e) = transport.close() {
                error!("Failed to release {}: {}", self.endpoint, e);
            }
        }
    }
}

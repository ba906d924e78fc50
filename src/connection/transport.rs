use crate::connection::SendMessage;
use crate::error::Result;
use std::io::Write;

#[cfg(unix)]
use crate::configuration::constants::SEND_TIMEOUT;
#[cfg(unix)]
use crate::connection::Endpoint;
#[cfg(unix)]
use crate::error::Error;
#[cfg(unix)]
use std::os::unix::net::UnixStream;
#[cfg(unix)]
use std::time::Duration;

/// A one-way channel carrying already framed payloads to a sink.
pub trait Transport: for<'a> SendMessage<&'a [u8], Result<()>> {
    /// Flushes pending output and releases the channel.
    fn close(self) -> Result<()>;
}

/// Writes every frame to the wrapped writer and flushes it straight away, so
/// the sink observes frames in send order.
pub struct WriterTransport<W: Write> {
    writer: W,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> SendMessage<&'a [u8], Result<()>> for WriterTransport<W> {
    fn send(&mut self, data: &'a [u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(unix)]
pub type IpcTransport = WriterTransport<UnixStream>;

#[cfg(unix)]
impl WriterTransport<UnixStream> {
    /// Connects to a sink listening on the endpoint's Unix domain socket, with
    /// the default send timeout.
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        Self::connect_with_timeout(endpoint, SEND_TIMEOUT)
    }

    /// A send that cannot complete within `timeout`, because the sink stopped
    /// reading, fails with `Error::Transport` instead of blocking.
    pub fn connect_with_timeout(endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
        let connect_error = |source| Error::Connect {
            endpoint: endpoint.to_string(),
            source,
        };
        let stream = UnixStream::connect(endpoint.path()).map_err(connect_error)?;
        stream.set_write_timeout(Some(timeout)).map_err(connect_error)?;
        Ok(Self::new(stream))
    }
}

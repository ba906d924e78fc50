pub mod endpoint;
pub mod publisher;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use self::endpoint::Endpoint;
pub use self::publisher::Publisher;
#[cfg(unix)]
pub use self::transport::IpcTransport;
pub use self::transport::{Transport, WriterTransport};

pub trait SendMessage<T, R> {
    fn send(&mut self, data: T) -> R;
}

use crate::error::Error;
use core::str::FromStr;
use std::fmt;
use std::path::{Path, PathBuf};

const IPC_SCHEME: &str = "ipc://";

/// Address of the sink a publisher connects to.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Ipc(PathBuf),
}

impl Endpoint {
    pub fn path(&self) -> &Path {
        match self {
            Endpoint::Ipc(path) => path.as_path(),
        }
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(IPC_SCHEME) {
            Some(path) if !path.is_empty() => Ok(Endpoint::Ipc(PathBuf::from(path))),
            _ => Err(Error::Endpoint(s.to_owned())),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Ipc(path) => write!(f, "{}{}", IPC_SCHEME, path.display()),
        }
    }
}

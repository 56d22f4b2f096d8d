// ABOUTME: Configuration for the textlog server: listen address and storage directory.
// ABOUTME: Both default to compile-time constants; there is no environment override.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

/// Port the server listens on by default.
pub const DEFAULT_PORT: u16 = 5000;

/// Listen address used when none is given: all interfaces on `DEFAULT_PORT`.
pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT));

/// Directory holding `logs.txt` when none is given.
pub const DEFAULT_STORAGE_DIR: &str = "/storage";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextlogConfig {
    pub bind: SocketAddr,
    pub storage_dir: PathBuf,
}

impl TextlogConfig {
    pub fn new(bind: SocketAddr, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind,
            storage_dir: storage_dir.into(),
        }
    }
}

impl Default for TextlogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BIND, DEFAULT_STORAGE_DIR)
    }
}

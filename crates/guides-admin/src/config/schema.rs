use std::net::{Ipv4Addr, SocketAddr};

use guides_core::error::{GuidesError, Result};

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub port: u16,
}

impl AdminConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(GuidesError::InvalidConfig("$PORT must not be 0".into()));
        }
        Ok(())
    }

    /// All interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

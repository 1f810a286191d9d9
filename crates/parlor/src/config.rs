//! Environment configuration for the Parlor server.

use std::env;

use crate::ServerError;

/// The one recognized environment variable: the listen port.
const PORT_VAR: &str = "PORT";

/// Listen port used when `PORT` is unset or empty.
const DEFAULT_PORT: u16 = 6000;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the acceptor listens on.
    pub port: u16,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// A `PORT` value that does not parse as a port number is a fatal
    /// startup error; the server cannot guess what the operator meant.
    pub fn from_env() -> Result<Self, ServerError> {
        let value = env::var(PORT_VAR).ok();
        Self::from_port_value(value.as_deref())
    }

    fn from_port_value(value: Option<&str>) -> Result<Self, ServerError> {
        let port = match value {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|source| ServerError::InvalidPort {
                value: raw.to_string(),
                source,
            })?,
        };
        Ok(Self { port })
    }

    /// The address the acceptor binds: all interfaces, configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

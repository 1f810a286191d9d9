//! Startup errors for the Parlor server.

/// Errors that end the process before it starts serving.
///
/// Per-session I/O failures never appear here: they are logged where they
/// happen and the session carries on, so one misbehaving peer cannot
/// affect the server or the other sessions.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The `PORT` environment variable does not hold a valid port number.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        /// The offending value, verbatim.
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Binding the listen socket failed (e.g. the port is already in use).
    #[error("failed to bind listen socket: {0}")]
    Bind(#[source] std::io::Error),
}

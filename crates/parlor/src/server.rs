//! The TCP connection acceptor.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use parlor_room::RoomRegistry;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::handler::handle_connection;
use crate::ServerError;

/// The room registry specialized to TCP sessions: each roster entry parks
/// its connection's write half, which keeps the socket open for as long
/// as the client stays on the roster.
pub type TcpRegistry = RoomRegistry<OwnedWriteHalf>;

/// A bound Parlor chat server. Call [`run()`](Self::run) to start
/// accepting connections.
pub struct ChatServer {
    listener: TcpListener,
    registry: Arc<TcpRegistry>,
}

impl ChatServer {
    /// Binds the listen socket.
    ///
    /// Without its port the server cannot function, so the caller is
    /// expected to treat a bind failure as fatal and exit.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.bind_addr())
            .await
            .map_err(ServerError::Bind)?;
        tracing::info!(port = config.port, "listening for connections");

        Ok(Self {
            listener,
            registry: Arc::new(TcpRegistry::new()),
        })
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Returns a handle to the shared room registry.
    pub fn registry(&self) -> Arc<TcpRegistry> {
        Arc::clone(&self.registry)
    }

    /// Runs the accept loop.
    ///
    /// Each accepted connection is logged and handed to its own task
    /// running onboarding against the shared registry. A failed accept is
    /// transient: it is logged and the loop moves on without touching the
    /// existing sessions. Runs until the process is terminated.
    pub async fn run(self) -> Result<(), ServerError> {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    tracing::info!(%peer, "accepted connection");
                    let registry = Arc::clone(&self.registry);
                    tokio::spawn(handle_connection(stream, registry));
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}

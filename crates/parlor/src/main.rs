//! Parlor server binary: configure from the environment, bind, serve.

use parlor::{ChatServer, ServerConfig, ServerError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = serve().await {
        tracing::error!(error = %e, "fatal startup error");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let server = ChatServer::bind(&config).await?;
    server.run().await
}

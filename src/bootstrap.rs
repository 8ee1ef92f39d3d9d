//! Server bootstrap - the composition root.
//!
//! This module is the only place where the listener is bound and the
//! router is wired up.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::create_router;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server. Bound on all interfaces.
    pub port: u16,
}

impl ServerConfig {
    /// Create config with the default port (8080, where the frontend
    /// expects the backend).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self { port: 8080 }
    }

    /// Override the listen port (for embedding the server in tests).
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Start the web server on the configured port.
///
/// Serves until the process is terminated. A bind failure (e.g. port
/// already in use) propagates as a fatal error.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let app = create_router();

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("timetable server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_port_8080() {
        assert_eq!(ServerConfig::with_defaults().port, 8080);
    }

    #[test]
    fn with_port_overrides_default() {
        let config = ServerConfig::with_defaults().with_port(0);
        assert_eq!(config.port, 0);
    }
}

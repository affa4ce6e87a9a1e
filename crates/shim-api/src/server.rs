//! Shim server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::error::ShimError;
use crate::http::routes::create_router;
use crate::state::AppState;

/// Listen address of one shim.
#[derive(Debug, Clone)]
pub struct ServerAddr {
    pub host: String,
    pub port: u16,
}

impl ServerAddr {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl std::fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// The shim server.
///
/// Owns the shared state; the router is rebuilt from it on each `serve`.
pub struct ShimServer {
    addr: ServerAddr,
    state: Arc<AppState>,
}

impl ShimServer {
    pub fn new(addr: ServerAddr, state: Arc<AppState>) -> Self {
        Self { addr, state }
    }

    /// Configured address.
    pub fn addr(&self) -> &ServerAddr {
        &self.addr
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Bind the listening socket. Host names are resolved.
    pub async fn bind(&self) -> Result<TcpListener, ShimError> {
        let listener = TcpListener::bind((self.addr.host.as_str(), self.addr.port)).await?;
        Ok(listener)
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), ShimError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: SocketAddr = listener.local_addr()?;
        let app = create_router(self.state.clone());

        info!("{} listening on {}", self.state.profile, local);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("{} stopped", self.state.profile);
        Ok(())
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<(), ShimError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }
}

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::lib::errors::LaunchError;

/// All-interfaces address for `port`.
pub fn listen_addr(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

/// Bind the static server socket. Done in the foreground so the port is
/// accepting connections before the browser is started.
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, LaunchError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| LaunchError::Bind { addr, source })
}

/// Static file router rooted at `root`.
pub fn router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Serve `root` on a detached task that lives until the process exits.
pub fn spawn_static_server(listener: TcpListener, root: PathBuf) -> JoinHandle<()> {
    tokio::spawn(async move {
        let local_addr = listener.local_addr().ok();
        info!(
            target: "urban5_launcher::server",
            bind_addr = ?local_addr,
            root = %root.display(),
            "Serving build directory"
        );
        if let Err(err) = axum::serve(listener, router(&root)).await {
            error!(
                target: "urban5_launcher::server",
                error = %err,
                "Static server stopped"
            );
        }
    })
}

//! # survey-server
//!
//! axum HTTP surface of the BI survey backend.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /` | landing page from the pages directory |
//! | `GET /paginas/{nombre}` | named page, or redirect to `/` |
//! | `GET /encuesta` | survey form |
//! | `POST /encuesta` | survey submission |
//! | `GET /api/subprocesos` | subprocesses of a process |
//! | `/static/*` | assets from the static directory |

pub mod error;
pub mod form;
pub mod pages;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use routes::{pages as page_routes, survey};
use state::AppState;

/// Assemble the application router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.server.static_dir);

    Router::new()
        .route("/", get(page_routes::home))
        .route("/paginas/{nombre}", get(page_routes::named_page))
        .route(
            "/encuesta",
            get(survey::encuesta_get).post(survey::encuesta_post),
        )
        .route("/api/subprocesos", get(survey::api_subprocesos))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns the I/O error if the address cannot be bound or the server fails.
pub async fn serve(state: Arc<AppState>) -> std::io::Result<()> {
    let address = state.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "survey server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("survey server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(error) => {
                warn!(%error, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

//! HTTP surface for the digest service.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use transcript_pdf::PdfTextExtractor;

use crate::{tokens::TokenCounter, ContentGenerator, DigestService};

pub mod error;
pub mod routes;

/// Uploaded transcripts are rarely more than a few MB.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn router<G, C, P>(service: Arc<DigestService<G, C, P>>) -> Router
where
    G: ContentGenerator + Send + Sync + 'static,
    C: TokenCounter + Send + Sync + 'static,
    P: PdfTextExtractor + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(routes::health_handler))
        .route(
            "/earnings_transcript_summary/",
            post(routes::summarize_transcript::<G, C, P>),
        )
        .route(
            "/earnings_transcript_summary_from_pdf/",
            post(routes::summarize_transcript_from_pdf::<G, C, P>),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serves `router` on `listener` until ctrl-c is received.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    tracing::info!(addr = ?listener.local_addr()?, "Starting server");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutting down server");
        })
        .await
}

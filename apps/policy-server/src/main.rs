//! Policy Simplifier Server
//!
//! Accepts insurance policy PDFs over HTTP and returns the simplified
//! summary produced by the policy engine.
//!
//! - `GET /health` - liveness check
//! - `POST /api/simplify-policy` - multipart upload, field `file`
//!
//! Requests are rate limited per client IP via tower-governor. Extraction
//! runs on the blocking pool under the configured timeout.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use policy_engine::{PipelineConfig, PolicyEngine};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
#[cfg(test)]
mod tests;

use api::{handle_health, handle_simplify_policy};

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Command-line arguments for the policy server
#[derive(Parser, Debug)]
#[command(name = "policy-server")]
#[command(about = "HTTP server that simplifies insurance policy PDFs")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Processing timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Pipeline configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the artifacts of every request into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PolicyEngine>,
    /// Processing timeout in milliseconds
    pub timeout_ms: u64,
    pub output_dir: Option<PathBuf>,
}

/// Routes and per-request layers, without rate limiting
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/simplify-policy", post(handle_simplify_policy))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting policy server on {}:{}", args.host, args.port);

    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    let engine = PolicyEngine::with_config(config)?;
    info!("Loaded {} extraction rules", engine.library().len());

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState {
        engine: Arc::new(engine),
        timeout_ms: args.timeout_ms,
        output_dir: args.output_dir.clone(),
    };

    let app = app_router(state).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Processing timeout: {}ms", args.timeout_ms);
    if let Some(dir) = &args.output_dir {
        info!("Writing artifacts to {}", dir.display());
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

use destinations_api::config::Config;
use destinations_api::routes::{create_router, SERVICE_NAME};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("destinations_api=info,tower_http=info")),
        )
        .init();

    // Create the router with all routes
    let app = create_router();

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        service = SERVICE_NAME,
        "server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

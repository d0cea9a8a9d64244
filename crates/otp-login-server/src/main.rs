//! WhatsApp OTP login backend - Entry point.

use message_central_client::MessageCentralClient;
use otp_login_server::{
    api::{create_router, AppState},
    config::Config,
    registry::Store,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting OTP login backend");

    // Initialize storage
    let store = if config.registry.persist {
        Store::json(config.registry.path.clone())
    } else {
        info!("Persistence disabled, using in-memory registry");
        Store::memory()
    };

    // Load existing users
    let registry = store.load().await;
    info!("Registry holds {} users", registry.count());

    // Initialize provider client
    let provider = match MessageCentralClient::new(
        &config.provider.base_url,
        &config.provider.customer_id,
        &config.provider.auth_token,
        &config.provider.country_code,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Message Central client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state and router
    let state = AppState::new(registry, store, provider, config.frontend.build_dir.clone());
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

use std::sync::Arc;

use anyhow::{Context, Result};
use car_parts_api::{
    application::part_service::PartService, build_router, config::AppConfig,
    infrastructure::mongo_part_repository::MongoPartRepository, state::AppState,
};
use mongodb::{Client, options::ClientOptions};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let mut client_options = ClientOptions::parse(&config.mongo_details)
        .await
        .context("MONGO_DETAILS must be a valid MongoDB connection string")?;
    client_options.server_selection_timeout = Some(config.db_timeout);
    client_options.connect_timeout = Some(config.db_timeout);

    let client = Client::with_options(client_options).context("failed to build MongoDB client")?;
    let database = client.database(&config.database_name);

    let repository = Arc::new(MongoPartRepository::new(&database));
    let service = Arc::new(PartService::new(repository));
    let state = AppState::new(service);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        database = %config.database_name,
        "car parts API started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("car_parts_api=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

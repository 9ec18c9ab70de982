use std::net::SocketAddr;
use std::sync::Arc;

use hauler_api::{app, AppState};
use hauler_order::OrderOrchestrator;
use hauler_store::{app_config::Config, DbClient, PgCargoRegistrar, PgLocationResolver, PgOrderStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hauler_api=debug,hauler_order=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Hauler API on port {}", config.server.port);

    let db = DbClient::connect(&config.database.url, config.database.max_connections)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let orchestrator = Arc::new(OrderOrchestrator::new(
        Arc::new(PgLocationResolver::new(db.pool.clone())),
        Arc::new(PgCargoRegistrar::new(db.pool.clone())),
        Arc::new(PgOrderStore::new(db.pool.clone())),
        config.orders.transition_mode,
    ));

    let app = app(AppState { orchestrator });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

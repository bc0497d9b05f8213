use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    api::jackets::init_indexes(&db).await?;
    api::reviews::init_indexes(&db).await?;

    if config.seed_sample_data {
        api::jackets::seed(&db).await?;
    }

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let api_routes = api::routes(&state);
    let app = create_router::<openapi::ApiDoc>(api_routes, state.config.cors_layer());

    info!(
        "Starting Amberarctic API (shutdown timeout {:?})",
        state.config.server.shutdown_timeout
    );

    let server_config = state.config.server.clone();
    let mongo_client = state.mongo_client.clone();
    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Amberarctic API shutdown complete");
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;
use movie_recommender::{
    api::{create_router, AppState},
    config::Config,
    data::Catalog,
    logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logger();

    let config = Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let catalog = Catalog::load(&config.movies_path, &config.ratings_path)
        .context("Failed to load movie data")?;
    let catalog = Arc::new(catalog);

    let state = AppState::new(catalog, &config);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Server running on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

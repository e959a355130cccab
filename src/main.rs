mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env();

    // A missing or malformed dataset is fatal; there is nothing to serve.
    let table = data::loader::load_file(&config.data_path)
        .with_context(|| format!("loading dataset from {}", config.data_path.display()))?;
    let state = AppState::new(table)?;
    log::info!(
        "loaded {} emission records, years {}..{}",
        state.table.len(),
        state.bounds.from,
        state.bounds.to
    );

    let router = app::router(state);
    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("binding {}", config.http_addr))?;
    log::info!("listening on http://{}", config.http_addr);

    axum::serve(listener, router).await.context("serving HTTP")?;
    Ok(())
}

mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, render::Templates, router, service::user::RandomUserSampler,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let templates = Templates::embedded()?;

    let app = router::router(&config).with_state(AppState::new(
        db,
        Arc::new(templates),
        Arc::new(RandomUserSampler),
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}

mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    bot, config::Config, error::AppError, router, scheduler::inactive_communities, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db.clone(), config.storage_timeout, config.app_url.clone());

    tracing::info!("Starting server");

    // Start Discord bot in a separate task
    let shard_manager = match bot::start::init_bot(&config, state.clone()).await? {
        Some(client) => {
            let shard_manager = client.shard_manager.clone();
            tokio::spawn(async move {
                if let Err(e) = bot::start::start_bot(client).await {
                    tracing::error!("Discord bot error: {}", e);
                }
            });
            Some(shard_manager)
        }
        None => None,
    };

    let mut scheduler =
        inactive_communities::start_scheduler(db, config.inactive_after_days).await?;

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");

    if let Some(shard_manager) = shard_manager {
        shard_manager.shutdown_all().await;
    }
    scheduler.shutdown().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e);
        }
    };

    tracing::info!("Starting voice channel notifier");

    if let Err(e) = bot::start::start_bot(config).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}

//! MongoDB connection bootstrap

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::info;

use crate::config::DatabaseConfig;

/// Error type for connection bootstrap
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB and return the configured database handle.
///
/// The client owns a process-wide connection pool; it is created once
/// at startup and shared by every request. The connection is verified
/// with a ping before the handle is returned.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, MongoError> {
    info!("Connecting to MongoDB at {}", config.uri);

    let mut options = ClientOptions::parse(&config.uri).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    let db = client.database(&config.database);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Database connected");
    Ok(db)
}

//! Database connection and initialization.

use mongodb::{
    bson::{doc, Document},
    error::Error as MongoError,
    options::ClientOptions,
    Client, Collection,
};

use common::DatabaseConfig;

/// Database wrapper for connection management.
///
/// Owns the MongoDB client; collections are handed to repositories at startup.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
    services_collection: String,
    bookings_collection: String,
}

impl Database {
    /// Connect and verify the deployment answers a ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, MongoError> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some("booking-api".to_string());

        let client = Client::with_options(options)?;
        let database = Self {
            db: client.database(&config.name),
            services_collection: config.services_collection.clone(),
            bookings_collection: config.bookings_collection.clone(),
        };

        database.ping().await?;
        tracing::info!(database = %config.name, "Database connected");

        Ok(database)
    }

    pub fn services(&self) -> Collection<Document> {
        self.db.collection(&self.services_collection)
    }

    pub fn bookings(&self) -> Collection<Document> {
        self.db.collection(&self.bookings_collection)
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> Result<(), MongoError> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

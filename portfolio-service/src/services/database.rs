use futures::TryStreamExt;
use mongodb::{
    bson::{Bson, Document},
    Client as MongoClient, Database,
};
use serde::Serialize;
use service_core::error::AppError;

/// Thin façade over the document store.
///
/// Collections are addressed by name and hold schema-less documents; all
/// mutation discipline is delegated to the store itself.
#[derive(Clone)]
pub struct PortfolioDb {
    db: Database,
}

impl PortfolioDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { db })
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::error!("Failed to list collections: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    /// Insert one record into the named collection and return the
    /// store-assigned identifier.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<Bson, AppError> {
        let document = mongodb::bson::to_document(record).map_err(|e| {
            tracing::error!("Failed to serialize record for {}: {}", collection, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into {}: {}", collection, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(result.inserted_id)
    }

    /// Fetch every document in the named collection.
    pub async fn get_documents(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(None, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", collection, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect documents from {}: {}", collection, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }
}

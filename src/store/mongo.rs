use mongodb::bson::Document;
use mongodb::{Client, Database};
use serde::Serialize;

use super::DocumentStore;
use crate::Result;

/// MongoDB-backed store bound to a single database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(database)))
    }

    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn namespace(&self, collection: &str) -> String {
        format!("{}.{}", self.database.name(), collection)
    }
}

impl DocumentStore for MongoStore {
    async fn drop_collection(&self, collection: &str) -> Result<()> {
        self.database
            .collection::<Document>(collection)
            .drop()
            .await?;
        tracing::debug!("Dropped {}", self.namespace(collection));
        Ok(())
    }

    async fn insert_many<D>(&self, collection: &str, documents: &[D]) -> Result<usize>
    where
        D: Serialize + Send + Sync,
    {
        // The driver rejects an empty bulk insert.
        if documents.is_empty() {
            return Ok(0);
        }

        let result = self
            .database
            .collection::<D>(collection)
            .insert_many(documents)
            .await?;
        tracing::debug!(
            "Inserted {} documents into {}",
            result.inserted_ids.len(),
            self.namespace(collection)
        );
        Ok(result.inserted_ids.len())
    }

    async fn insert_one<D>(&self, collection: &str, document: &D) -> Result<()>
    where
        D: Serialize + Send + Sync,
    {
        self.database
            .collection::<D>(collection)
            .insert_one(document)
            .await?;
        tracing::debug!("Inserted 1 document into {}", self.namespace(collection));
        Ok(())
    }
}

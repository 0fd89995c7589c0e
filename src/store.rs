use serde::Serialize;

use crate::Result;

pub mod mongo;

pub const PRODUCTS_COLLECTION: &str = "products";
pub const ABOUT_COLLECTION: &str = "about";

/// The writes the seeder needs from a document database.
pub trait DocumentStore {
    /// Removes the collection and all its documents. Dropping a collection
    /// that does not exist is not an error.
    #[allow(async_fn_in_trait)]
    async fn drop_collection(&self, collection: &str) -> Result<()>;

    /// Inserts `documents` in one bulk write and returns how many were written.
    #[allow(async_fn_in_trait)]
    async fn insert_many<D>(&self, collection: &str, documents: &[D]) -> Result<usize>
    where
        D: Serialize + Send + Sync;

    #[allow(async_fn_in_trait)]
    async fn insert_one<D>(&self, collection: &str, document: &D) -> Result<()>
    where
        D: Serialize + Send + Sync;
}

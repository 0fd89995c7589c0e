//! The two loaders and the run that strings them together.
//!
//! Each loader replaces its collection wholesale: embeddings are computed
//! first, then the collection is dropped and refilled. A failure before the
//! drop leaves the previous contents in place; a failed insert after the
//! drop leaves the collection empty.

use std::path::Path;

use crate::config::Config;
use crate::document::{read_about, read_products, AboutDocument, EmbeddedProduct};
use crate::embedding::{embed_documents, openai::OpenAiEmbedder, Embedder};
use crate::store::{mongo::MongoStore, DocumentStore, ABOUT_COLLECTION, PRODUCTS_COLLECTION};
use crate::{Result, SeedError};

/// Loads products from `path`, embeds them and replaces the products
/// collection. Returns the number of documents inserted.
pub async fn seed_products<E, S>(
    path: &Path,
    embedder: &E,
    store: &S,
    batch_size: usize,
) -> Result<usize>
where
    E: Embedder,
    S: DocumentStore,
{
    let products = read_products(path)?;
    tracing::info!("Loaded {} products from {}", products.len(), path.display());

    let texts = products
        .iter()
        .map(|product| product.text_for_embedding())
        .collect::<Vec<_>>();

    tracing::info!("Generating embeddings for {} products...", products.len());
    let vectors = embed_documents(embedder, &texts, batch_size).await?;
    tracing::info!("Done generating embeddings.");

    let documents = products
        .into_iter()
        .zip(texts)
        .zip(vectors)
        .map(|((product, text), embedding)| product.with_embedding(text, embedding))
        .collect::<Vec<EmbeddedProduct>>();

    store.drop_collection(PRODUCTS_COLLECTION).await?;
    tracing::info!("Dropped {} collection.", PRODUCTS_COLLECTION);

    let inserted = store.insert_many(PRODUCTS_COLLECTION, &documents).await?;
    tracing::info!("Inserted {} products into {}.", inserted, PRODUCTS_COLLECTION);

    Ok(inserted)
}

/// Loads the about-us text from `path`, embeds it and replaces the about
/// collection with a single document.
pub async fn seed_about<E, S>(path: &Path, embedder: &E, store: &S) -> Result<()>
where
    E: Embedder,
    S: DocumentStore,
{
    let content = read_about(path)?;
    tracing::info!("Loaded {} bytes of about us content", content.len());

    tracing::info!("Generating embedding for about us content...");
    let mut vectors = embedder.embed(std::slice::from_ref(&content)).await?;
    if vectors.len() != 1 {
        return Err(SeedError::EmbeddingCount {
            expected: 1,
            actual: vectors.len(),
        });
    }
    let embedding = vectors.remove(0);
    tracing::info!("Done generating embedding.");

    let document = AboutDocument::new(content, embedding);

    store.drop_collection(ABOUT_COLLECTION).await?;
    tracing::info!("Dropped {} collection.", ABOUT_COLLECTION);

    store.insert_one(ABOUT_COLLECTION, &document).await?;
    tracing::info!("Inserted 1 document into {}.", ABOUT_COLLECTION);

    Ok(())
}

/// Builds the real clients from `config` and seeds both collections.
pub async fn run(config: &Config) -> Result<()> {
    let embedder = OpenAiEmbedder::new(
        &config.openai_base_url,
        &config.openai_api_key,
        &config.embedding_model,
    );
    let store = MongoStore::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    tracing::info!(
        model = embedder.model(),
        "Seeding database {}",
        config.mongodb_database
    );

    run_with(config, &embedder, &store).await
}

/// Seeds both collections, products first. Any error stops the run.
pub async fn run_with<E, S>(config: &Config, embedder: &E, store: &S) -> Result<()>
where
    E: Embedder,
    S: DocumentStore,
{
    tracing::info!("=== Seeding {} ===", PRODUCTS_COLLECTION);
    seed_products(
        &config.products_path(),
        embedder,
        store,
        config.embedding_batch_size,
    )
    .await?;

    tracing::info!("=== Seeding {} ===", ABOUT_COLLECTION);
    seed_about(&config.about_path(), embedder, store).await?;

    tracing::info!("All done!");
    Ok(())
}

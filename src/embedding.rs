use crate::{Result, SeedError};

pub mod openai;

/// Something that turns texts into vectors.
///
/// Implementations must return exactly one vector per input, in input order.
/// Callers pair results with inputs by position.
pub trait Embedder {
    #[allow(async_fn_in_trait)]
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Embeds `texts` in consecutive requests of at most `batch_size` inputs and
/// returns the vectors in input order.
pub async fn embed_documents<E: Embedder>(
    embedder: &E,
    texts: &[String],
    batch_size: usize,
) -> Result<Vec<Vec<f32>>> {
    let batches = texts.chunks(batch_size.max(1)).collect::<Vec<_>>();

    let mut embeddings = Vec::with_capacity(texts.len());

    for (id, batch) in batches.iter().enumerate() {
        tracing::debug!(
            "Generating embeddings for batch {} of {}",
            id + 1,
            batches.len()
        );

        let vectors = embedder.embed(batch).await?;
        if vectors.len() != batch.len() {
            return Err(SeedError::EmbeddingCount {
                expected: batch.len(),
                actual: vectors.len(),
            });
        }
        embeddings.extend(vectors);
    }

    Ok(embeddings)
}

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::embedding::Embedder;
use crate::store::DocumentStore;
use crate::{Result, SeedError};

/// Returns `[n]` for the n-th text it has ever been asked to embed, so
/// callers can check that vectors land on the right inputs.
#[derive(Default)]
pub struct StubEmbedder {
    requests: Mutex<Vec<usize>>,
    short_by_one: bool,
    fail: bool,
}

impl StubEmbedder {
    pub fn short_by_one() -> Self {
        Self {
            short_by_one: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Input count of every request made so far.
    pub fn requests(&self) -> Vec<usize> {
        self.requests.lock().unwrap().clone()
    }
}

impl Embedder for StubEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if self.fail {
            return Err(SeedError::Provider {
                status: reqwest::StatusCode::TOO_MANY_REQUESTS,
                body: "quota exceeded".to_string(),
            });
        }

        let mut requests = self.requests.lock().unwrap();
        let offset: usize = requests.iter().sum();
        requests.push(texts.len());

        let count = if self.short_by_one {
            texts.len().saturating_sub(1)
        } else {
            texts.len()
        };

        Ok((0..count).map(|i| vec![(offset + i) as f32]).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Drop(String),
    InsertMany(String, usize),
    InsertOne(String),
}

/// In-memory store that keeps documents as JSON and records every call.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    ops: Mutex<Vec<Op>>,
}

impl MemoryStore {
    pub fn with_documents(collection: &str, documents: Vec<Value>) -> Self {
        let store = Self::default();
        store
            .collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), documents);
        store
    }

    pub fn documents(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }
}

impl DocumentStore for MemoryStore {
    async fn drop_collection(&self, collection: &str) -> Result<()> {
        self.collections.lock().unwrap().remove(collection);
        self.ops
            .lock()
            .unwrap()
            .push(Op::Drop(collection.to_string()));
        Ok(())
    }

    async fn insert_many<D>(&self, collection: &str, documents: &[D]) -> Result<usize>
    where
        D: Serialize + Send + Sync,
    {
        let values = documents
            .iter()
            .map(|document| serde_json::to_value(document).unwrap())
            .collect::<Vec<_>>();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .extend(values);
        self.ops
            .lock()
            .unwrap()
            .push(Op::InsertMany(collection.to_string(), documents.len()));
        Ok(documents.len())
    }

    async fn insert_one<D>(&self, collection: &str, document: &D) -> Result<()>
    where
        D: Serialize + Send + Sync,
    {
        let value = serde_json::to_value(document).unwrap();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(value);
        self.ops
            .lock()
            .unwrap()
            .push(Op::InsertOne(collection.to_string()));
        Ok(())
    }
}

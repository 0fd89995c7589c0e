use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::{Result, SeedError};

/// A product record as it appears in the seed file.
///
/// Fields the seeder does not need are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Numbers are kept as written so integers stay integers when stored.
    pub price: Number,
    pub rating: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// The text we embed for this product. Downstream queries are embedded
    /// against this exact template, so it must not drift.
    pub fn text_for_embedding(&self) -> String {
        format!(
            "{} - {}: {} Ingredients: {}. Price: ${:.2}. Rating: {}.",
            self.name,
            self.category,
            self.description,
            self.ingredients.iter().join(", "),
            self.price.as_f64().unwrap_or_default(),
            self.rating
        )
    }

    pub fn with_embedding(
        mut self,
        text_for_embedding: String,
        embedding: Vec<f32>,
    ) -> EmbeddedProduct {
        self.extra.remove("text_for_embedding");
        self.extra.remove("embedding");

        EmbeddedProduct {
            product: self,
            text_for_embedding,
            embedding,
        }
    }
}

/// The stored form: the source record plus its embedding text and vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub text_for_embedding: String,
    pub embedding: Vec<f32>,
}

pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_products(&contents, path)
}

fn parse_products(contents: &str, path: &Path) -> Result<Vec<Product>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line.trim()).map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}

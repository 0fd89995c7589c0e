use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, SeedError};

pub const ABOUT_TITLE: &str = "Version Coffee - About Us";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutDocument {
    pub title: String,
    pub content: String,
    pub embedding: Vec<f32>,
}

impl AboutDocument {
    pub fn new(content: String, embedding: Vec<f32>) -> Self {
        Self {
            title: ABOUT_TITLE.to_string(),
            content,
            embedding,
        }
    }
}

/// Reads the about-us prose, trimmed of surrounding whitespace.
pub fn read_about(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map(|content| content.trim().to_string())
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A blog post as returned by the API.
pub struct Post {
    /// Identifier assigned by the service.
    pub id: i64,
    /// Post title, never blank.
    pub title: String,
    /// Post body, may be empty.
    pub content: String,
    /// Creation time assigned by the service (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload for creating or updating a post.
pub struct PostInput {
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
}

impl PostInput {
    /// Builds a payload from anything convertible to strings.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

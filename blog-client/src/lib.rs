//! Client library for the blog REST API.
//!
//! `BlogClient` wraps the five `/posts/` endpoints of the service:
//! list, list recent, create, update and delete. Every call issues exactly
//! one HTTP request; failures are logged through `tracing` and handed back
//! to the caller unchanged.
#![warn(missing_docs)]

mod config;
mod error;
mod http_client;
mod models;

pub use config::{API_URL_ENV, ClientConfig, DEFAULT_API_URL};
pub use error::{BlogClientError, BlogClientResult};
pub use models::{Post, PostInput};
pub use reqwest::StatusCode;

use http_client::HttpClient;

fn logged<T>(operation: &'static str, result: BlogClientResult<T>) -> BlogClientResult<T> {
    result.inspect_err(|err| tracing::error!(operation, error = %err, "blog api call failed"))
}

#[derive(Debug, Clone)]
/// Client for the blog API. Holds no state besides its configuration.
pub struct BlogClient {
    http_client: HttpClient,
}

impl BlogClient {
    /// Creates a client bound to `config.base_url`.
    pub fn new(config: ClientConfig) -> BlogClientResult<Self> {
        let http_client = HttpClient::new(config.base_url)?;
        Ok(Self { http_client })
    }

    /// Base URL every request is built against.
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// `GET /posts/`
    pub async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        logged("list_posts", self.http_client.list_posts().await)
    }

    /// `GET /posts/recent/`. Order is whatever the service returns.
    pub async fn list_recent_posts(&self) -> BlogClientResult<Vec<Post>> {
        logged(
            "list_recent_posts",
            self.http_client.list_recent_posts().await,
        )
    }

    /// `POST /posts/` and returns the created post.
    ///
    /// A blank title is rejected before any request is sent.
    pub async fn create_post(&self, input: &PostInput) -> BlogClientResult<Post> {
        logged("create_post", self.http_client.create_post(input).await)
    }

    /// `PUT /posts/{id}/` and returns the updated post.
    ///
    /// A blank title is rejected before any request is sent.
    pub async fn update_post(&self, id: i64, input: &PostInput) -> BlogClientResult<Post> {
        logged("update_post", self.http_client.update_post(id, input).await)
    }

    /// `DELETE /posts/{id}/`. The response body, if any, is ignored.
    pub async fn delete_post(&self, id: i64) -> BlogClientResult<()> {
        logged("delete_post", self.http_client.delete_post(id).await)
    }
}

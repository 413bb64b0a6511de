use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::{Client, Method, Response};
use serde::{Deserialize, Serialize};

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Post, PostInput};

#[derive(Debug, Serialize)]
struct PostPayloadDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostDto {
    id: i64,
    title: String,
    content: String,
    created_at: String,
}

/// Layouts accepted for timestamps that carry no offset; read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

impl TryFrom<PostDto> for Post {
    type Error = BlogClientError;

    fn try_from(value: PostDto) -> Result<Self, Self::Error> {
        if value.title.trim().is_empty() {
            return Err(BlogClientError::InvalidPost {
                id: value.id,
                field: "title",
                message: "must not be empty",
            });
        }

        let Some(created_at) = parse_timestamp(&value.created_at) else {
            return Err(BlogClientError::InvalidPost {
                id: value.id,
                field: "created_at",
                message: "must be a parseable timestamp",
            });
        };

        Ok(Self {
            id: value.id,
            title: value.title,
            content: value.content,
            created_at,
        })
    }
}

impl<'a> PostPayloadDto<'a> {
    fn from_input(input: &'a PostInput) -> BlogClientResult<Self> {
        if input.title.trim().is_empty() {
            return Err(BlogClientError::InvalidInput {
                field: "title",
                message: "must not be empty",
            });
        }

        Ok(Self {
            title: &input.title,
            content: &input.content,
        })
    }
}

fn decode_post(raw: &str) -> BlogClientResult<Post> {
    let dto: PostDto = serde_json::from_str(raw)?;
    Post::try_from(dto)
}

fn decode_posts(raw: &str) -> BlogClientResult<Vec<Post>> {
    let dtos: Vec<PostDto> = serde_json::from_str(raw)?;
    dtos.into_iter().map(Post::try_from).collect()
}

#[derive(Debug, Clone)]
/// Low-level REST client: one method per endpoint, no logging.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub(crate) fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends one request and turns any non-2xx status into `BlogClientError::Api`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&PostPayloadDto<'_>>,
    ) -> BlogClientResult<Response> {
        let mut request = self.client.request(method, self.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(BlogClientError::from_http_status(response.status()));
        }

        Ok(response)
    }

    async fn fetch_posts(&self, path: &str) -> BlogClientResult<Vec<Post>> {
        let response = self.send(Method::GET, path, None).await?;
        let raw = response.text().await?;
        decode_posts(&raw)
    }

    async fn write_post(
        &self,
        method: Method,
        path: &str,
        input: &PostInput,
    ) -> BlogClientResult<Post> {
        let payload = PostPayloadDto::from_input(input)?;
        let response = self.send(method, path, Some(&payload)).await?;
        let raw = response.text().await?;
        decode_post(&raw)
    }

    pub(crate) async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.fetch_posts("/posts/").await
    }

    pub(crate) async fn list_recent_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.fetch_posts("/posts/recent/").await
    }

    pub(crate) async fn create_post(&self, input: &PostInput) -> BlogClientResult<Post> {
        self.write_post(Method::POST, "/posts/", input).await
    }

    pub(crate) async fn update_post(&self, id: i64, input: &PostInput) -> BlogClientResult<Post> {
        self.write_post(Method::PUT, &format!("/posts/{id}/"), input)
            .await
    }

    pub(crate) async fn delete_post(&self, id: i64) -> BlogClientResult<()> {
        self.send(Method::DELETE, &format!("/posts/{id}/"), None)
            .await?;
        Ok(())
    }
}

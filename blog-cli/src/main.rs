use std::process;

use anyhow::{Context, Result};
use blog_client::{API_URL_ENV, BlogClient, BlogClientError, ClientConfig, Post, PostInput};
use clap::{Parser, Subcommand};
use tracing::debug;

mod logging;

use logging::init_logging;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "Command-line client for the blog API")]
struct Cli {
    /// API base URL, e.g. `http://localhost:8000/api` (overrides BLOG_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all posts.
    List,
    /// List recent posts.
    Recent,
    /// Create a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Update a post.
    ///
    /// Without `--content` the current content of the post is kept.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a post.
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    init_logging(&log_level)?;

    let config = resolve_config(cli.api_url, std::env::var(API_URL_ENV).ok());
    debug!(base_url = %config.base_url, "using blog api");
    let client = BlogClient::new(config).context("failed to build http client")?;

    match cli.command {
        Command::List => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_posts(cli.json, "Posts", &posts)?;
        }
        Command::Recent => {
            let posts = client
                .list_recent_posts()
                .await
                .map_err(map_client_error)?;
            print_posts(cli.json, "Recent Posts", &posts)?;
        }
        Command::Create { title, content } => {
            let post = client
                .create_post(&PostInput::new(title, content))
                .await
                .map_err(map_client_error)?;
            print_post(cli.json, "Post created", &post)?;
        }
        Command::Update { id, title, content } => {
            let content = match content {
                Some(content) => content,
                None => current_content(&client, id).await?,
            };

            let post = client
                .update_post(id, &PostInput::new(title, content))
                .await
                .map_err(map_client_error)?;
            print_post(cli.json, "Post updated", &post)?;
        }
        Command::Delete { id } => {
            client.delete_post(id).await.map_err(map_client_error)?;
            println!("Post deleted: id={id}");
        }
    }

    Ok(())
}

/// `--api-url` wins over the environment; both fall back to the default base URL.
fn resolve_config(api_url: Option<String>, env_value: Option<String>) -> ClientConfig {
    ClientConfig::from_value(api_url.or(env_value).map(normalize_server))
}

fn normalize_server(server: String) -> String {
    let server = server.trim();
    if server.is_empty() || server.starts_with("http://") || server.starts_with("https://") {
        return server.to_string();
    }

    format!("http://{server}")
}

async fn current_content(client: &BlogClient, id: i64) -> Result<String> {
    let posts = client.list_posts().await.map_err(map_client_error)?;
    find_content(&posts, id).with_context(|| format!("post not found: id={id}"))
}

fn find_content(posts: &[Post], id: i64) -> Option<String> {
    posts
        .iter()
        .find(|post| post.id == id)
        .map(|post| post.content.clone())
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::Api { status, reason } => {
            format!("API error: {reason} (status {})", status.as_u16())
        }
        BlogClientError::Transport(err) => format!("request failed: {err}"),
        BlogClientError::Decode(err) => format!("unexpected response body: {err}"),
        err @ (BlogClientError::InvalidPost { .. } | BlogClientError::InvalidInput { .. }) => {
            err.to_string()
        }
    };
    anyhow::anyhow!(message)
}

fn print_posts(json: bool, heading: &str, posts: &[Post]) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    println!("{heading} ({})", posts.len());
    for post in posts {
        println!();
        print_card(post);
    }
    Ok(())
}

fn print_post(json: bool, heading: &str, post: &Post) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(post)?);
        return Ok(());
    }

    println!("{heading}");
    print_card(post);
    Ok(())
}

fn print_card(post: &Post) {
    println!("[{}] {}", post.id, post.title);
    if !post.content.is_empty() {
        println!("    {}", post.content);
    }
    println!("    {}", post.created_at.format("%Y-%m-%d"));
}

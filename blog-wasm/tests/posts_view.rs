use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use blog_client::{BlogClient, ClientConfig};
use blog_wasm::{PostsView, format_post_date, load_recent_posts};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_api(app: Router) -> BlogClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    BlogClient::new(ClientConfig::new(format!("http://{addr}/api"))).expect("client builds")
}

fn recent_posts_body() -> Value {
    json!([
        { "id": 1, "title": "Hello", "content": "first", "created_at": "2024-01-01T00:00:00Z" },
        { "id": 8, "title": "Later", "content": "", "created_at": "2024-02-10T12:30:00Z" },
        { "id": 5, "title": "Middle", "content": "third", "created_at": "2024-01-20T08:00:00Z" },
    ])
}

#[tokio::test]
async fn loaded_view_matches_server_list() {
    let app = Router::new().route(
        "/api/posts/recent/",
        get(|| async { axum::Json(recent_posts_body()) }),
    );
    let client = spawn_api(app).await;

    let view = load_recent_posts(&client).await;

    let ids: Vec<i64> = view.posts().iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![1, 8, 5]);
    let titles: Vec<&str> = view.posts().iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, vec!["Hello", "Later", "Middle"]);
    assert_eq!(format_post_date(&view.posts()[0].created_at), "1/1/2024");
}

#[tokio::test]
async fn server_error_shows_status_phrase() {
    let app = Router::new().route(
        "/api/posts/recent/",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = spawn_api(app).await;

    let view = load_recent_posts(&client).await;

    let message = view.error().expect("view must be in error state");
    assert!(message.contains("API error"));
    assert!(message.contains("Internal Server Error"));
}

#[tokio::test]
async fn refused_connection_shows_transport_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client =
        BlogClient::new(ClientConfig::new(format!("http://{addr}/api"))).expect("client builds");
    let expected = client
        .list_recent_posts()
        .await
        .expect_err("closed port must fail")
        .to_string();

    let view = load_recent_posts(&client).await;
    assert_eq!(view, PostsView::Error(expected));
}

#[tokio::test]
async fn malformed_body_is_an_error_not_an_empty_list() {
    let app = Router::new().route("/api/posts/recent/", get(|| async { "not json" }));
    let client = spawn_api(app).await;

    let view = load_recent_posts(&client).await;
    assert!(view.error().is_some());
    assert!(view.posts().is_empty());
}

#[tokio::test]
async fn timestamps_without_offset_still_load() {
    let app = Router::new().route(
        "/api/posts/recent/",
        get(|| async {
            axum::Json(json!([
                { "id": 1, "title": "Naive", "content": "", "created_at": "2024-01-01T10:00:00" },
                { "id": 2, "title": "Zulu", "content": "", "created_at": "2024-01-01T10:00:00Z" },
            ]))
        }),
    );
    let client = spawn_api(app).await;

    let view = load_recent_posts(&client).await;

    assert!(view.error().is_none(), "unexpected error: {:?}", view.error());
    let posts = view.posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].created_at, posts[1].created_at);
    assert_eq!(format_post_date(&posts[0].created_at), "1/1/2024");
}

use std::time::{SystemTime, UNIX_EPOCH};

use blog_client::{BlogClient, BlogClientError, ClientConfig, PostInput};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running blog API at BLOG_API_URL"]
async fn http_smoke_flow() {
    let client = BlogClient::new(ClientConfig::from_env()).expect("client builds");

    let suffix = unique_suffix();
    let title = format!("smoke title {suffix}");

    let created = client
        .create_post(&PostInput::new(&title, "smoke content"))
        .await
        .expect("create_post must succeed");
    assert_eq!(created.title, title);

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == created.id));

    client
        .list_recent_posts()
        .await
        .expect("list_recent_posts must succeed");

    let updated = client
        .update_post(
            created.id,
            &PostInput::new(format!("{title} updated"), "smoke content updated"),
        )
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    client
        .delete_post(created.id)
        .await
        .expect("delete_post must succeed");

    let second_delete = client.delete_post(created.id).await;
    assert!(matches!(second_delete, Err(BlogClientError::Api { .. })));
}

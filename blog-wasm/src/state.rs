use blog_client::{BlogClient, BlogClientResult, Post};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// What the recent-posts page is currently showing.
pub enum PostsView {
    /// Fetch still outstanding.
    #[default]
    Loading,
    /// Fetch failed; holds the text shown to the user.
    Error(String),
    /// Fetch succeeded; posts in server order.
    Loaded(Vec<Post>),
}

impl PostsView {
    /// Settles the view from a finished fetch.
    pub fn from_result(result: BlogClientResult<Vec<Post>>) -> Self {
        match result {
            Ok(posts) => Self::Loaded(posts),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    /// True while the fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message to show, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded posts; empty while loading or after an error.
    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Loaded(posts) => posts,
            _ => &[],
        }
    }
}

/// Fetches recent posts once and returns the settled view.
pub async fn load_recent_posts(client: &BlogClient) -> PostsView {
    PostsView::from_result(client.list_recent_posts().await)
}

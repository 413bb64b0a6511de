use blog_client::{BlogClient, ClientConfig, DEFAULT_API_URL};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::components::posts_panel::PostsPanel;
use crate::state::{PostsView, load_recent_posts};

const API_BASE_URL: &str = match option_env!("BLOG_API_URL") {
    Some(value) => value,
    None => DEFAULT_API_URL,
};

fn load_posts(posts_view: RwSignal<PostsView>) {
    posts_view.set(PostsView::Loading);

    let client = match BlogClient::new(ClientConfig::new(API_BASE_URL)) {
        Ok(client) => client,
        Err(err) => {
            posts_view.set(PostsView::from_result(Err(err)));
            return;
        }
    };

    spawn_local(async move {
        let next = load_recent_posts(&client).await;
        if let Some(message) = next.error() {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "failed to fetch recent posts: {message}"
            )));
        }
        // The signal is disposed once the page is unmounted; the result is dropped then.
        let _ = posts_view.try_set(next);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let posts_view = RwSignal::new(PostsView::Loading);

    load_posts(posts_view);

    view! { <PostsPanel posts_view=posts_view /> }
}

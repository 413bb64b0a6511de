use blog_client::Post;
use leptos::prelude::*;

use crate::format::format_post_date;
use crate::state::PostsView;

#[component]
fn PostCard(post: Post) -> impl IntoView {
    let date = format_post_date(&post.created_at);
    let datetime = post.created_at.to_rfc3339();

    view! {
        <article class="post-card">
            <h2>{post.title}</h2>
            <p>{post.content}</p>
            <time datetime=datetime>{date}</time>
        </article>
    }
}

/// Renders exactly one of loading, error or the post list.
#[component]
pub(crate) fn PostsPanel(posts_view: RwSignal<PostsView>) -> impl IntoView {
    move || match posts_view.get() {
        PostsView::Loading => view! { <div class="status">"Loading..."</div> }.into_any(),
        PostsView::Error(message) => view! {
            <div class="status error">"Error: " {message}</div>
        }
        .into_any(),
        PostsView::Loaded(posts) => view! {
            <main class="page">
                <h1>"Recent Posts"</h1>
                <div class="posts">
                    <For
                        each=move || posts.clone()
                        key=|post| post.id
                        children=|post| view! { <PostCard post=post /> }
                    />
                </div>
            </main>
        }
        .into_any(),
    }
}

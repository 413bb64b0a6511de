//! Recent-posts page for the browser (Leptos, client-side rendering).
//!
//! The view state and date formatting compile on every target so they can be
//! tested on the host; the components themselves only exist on `wasm32`.

mod format;
mod state;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

pub use format::format_post_date;
pub use state::{PostsView, load_recent_posts};

/// Installs the panic hook and mounts the page into `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

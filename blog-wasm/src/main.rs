#[cfg(target_arch = "wasm32")]
fn main() {
    blog_wasm::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Empty main so `cargo build --workspace` passes on the host.
}

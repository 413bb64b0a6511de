pub(crate) mod posts_panel;

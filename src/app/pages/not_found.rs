//! Catch-all route: unknown paths go back to home.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    tracing::debug!(path = segments.join("/"), "unknown route");
    nav.replace(Route::Home {});
    rsx! {}
}

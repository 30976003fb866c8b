//! Validation and submission notices.

use dioxus::prelude::*;

/// Renders every message, in order. Empty input renders nothing, so pages
/// can pass the current notice list unconditionally.
#[component]
pub fn Notices(messages: Vec<String>) -> Element {
    if messages.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "notice-list", role: "alert",
            for (i, message) in messages.iter().enumerate() {
                li { key: "{i}", "{message}" }
            }
        }
    }
}

//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
.status-warn { color: var(--pico-mark-background-color); }
.status-muted { color: var(--pico-muted-color); }
.notice-list { color: var(--pico-del-color); margin-bottom: 1rem; }
.step-chips { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.step-chips button { margin: 0; padding: 0.25rem 0.75rem; font-size: 0.85rem; }
.step-chips button.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.wizard-controls { display: flex; gap: 0.5rem; margin-top: 1rem; }
.wizard-controls button { margin: 0; }
.pager { display: flex; gap: 0.5rem; align-items: center; margin-top: 1rem; }
.pager button { margin: 0; padding: 0.25rem 0.75rem; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - PropCare", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        // Body content
        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "PropCare v{version}" }
        }
    }
}

//! Guest page: smart-lock access codes for the stay.

use dioxus::prelude::*;

use crate::app::api::{fetch_json_auth, AccessCode};
use crate::app::auth::use_session;
use crate::app::components::Layout;

/// Guest access page component.
#[component]
pub fn GuestAccess() -> Element {
    let session = use_session();

    let codes = use_resource(move || async move {
        let token = session.peek().token.clone().unwrap_or_default();
        fetch_json_auth::<Vec<AccessCode>>("/access-codes", &token).await.ok()
    });

    let is_loading = codes.read().is_none();
    let code_list = codes.read().clone().flatten().unwrap_or_default();

    let content = if is_loading {
        rsx! {
            p { aria_busy: "true", "Loading access codes..." }
        }
    } else if code_list.is_empty() {
        rsx! {
            p { "No active access codes. Codes appear here shortly before check-in." }
        }
    } else {
        rsx! {
            div { class: "grid",
                for code in code_list {
                    article { key: "{code.lock_name}-{code.valid_from}",
                        header { strong { "{code.lock_name}" } }
                        p { class: "status-ok", style: "font-size: 1.5rem;", "{code.code}" }
                        small { "Valid {code.valid_from} to {code.valid_to}" }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "My Stay".to_string(),
            nav_active: "guest".to_string(),

            h1 { "My Stay" }
            p { "Your smart-lock codes for the booked property." }
            {content}
        }
    }
}

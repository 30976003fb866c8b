//! Account activation page component.
//!
//! Exchanges the invite token from the URL for a session on mount.

use dioxus::prelude::*;

use crate::app::api::activate;
use crate::app::auth::{home_route, sign_in, use_session};
use crate::app::components::Layout;

#[derive(Clone, Copy, PartialEq)]
enum ActivationStatus {
    Pending,
    Failed,
}

/// Activation page component.
#[component]
pub fn Activate(token: String) -> Element {
    let session = use_session();
    let nav = navigator();
    let mut status = use_signal(|| ActivationStatus::Pending);

    // One exchange per mount; a failed token leaves the user on this page
    // with a pointer back to login.
    use_effect(move || {
        let token = token.clone();
        spawn(async move {
            match activate(&token).await {
                Ok(next) => {
                    let role = next.role;
                    sign_in(session, next);
                    nav.replace(home_route(role));
                }
                Err(err) => {
                    tracing::debug!(%err, "activation token rejected");
                    status.set(ActivationStatus::Failed);
                }
            }
        });
    });

    rsx! {
        Layout {
            title: "Activate account".to_string(),
            nav_active: "login".to_string(),

            h1 { "Account activation" }

            if status() == ActivationStatus::Pending {
                p { aria_busy: "true", "Activating your account..." }
            } else {
                p { class: "status-err", "This activation link is invalid or has expired." }
                p { "Ask for a new invite, or log in if your account is already active." }
            }
        }
    }
}

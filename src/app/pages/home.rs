//! Landing page component.

use dioxus::prelude::*;

use crate::app::auth::{home_route, use_session};
use crate::app::components::Layout;
use crate::app::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let role = session.read().role;
    let authenticated = session.read().is_authenticated();

    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            h1 { "Property services, handled" }
            p {
                "Book cleanings, track material requests, and manage guest "
                "access for your properties in one place."
            }

            if authenticated {
                p {
                    Link { to: home_route(role), "Go to your dashboard" }
                }
            } else {
                div { class: "grid",
                    Link { to: Route::Login {}, "Log in" }
                    Link { to: Route::Register {}, class: "secondary", "Become a provider" }
                }
            }
        }
    }
}

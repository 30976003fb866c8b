//! Navigation bar, aware of the current session's role.

use dioxus::prelude::*;

use crate::app::auth::{home_route, sign_out, use_session};
use crate::app::Route;
use crate::session::Role;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "client")
    pub active: String,
}

fn role_nav_label(role: Role) -> &'static str {
    match role {
        Role::Client => "My Bookings",
        Role::Supervisor => "Provider Desk",
        Role::Cleaner => "My Jobs",
        Role::Guest => "My Stay",
    }
}

/// Navigation bar. Anonymous visitors see login/registration; an
/// authenticated session sees its role home and a logout control.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let session = use_session();
    let nav = navigator();

    let nav_link_class = |page: &str| {
        if props.active == page {
            "contrast"
        } else {
            "secondary"
        }
    };

    let role = session.read().role;
    let authenticated = session.read().is_authenticated();

    rsx! {
        nav {
            ul {
                li {
                    Link { class: "contrast", to: Route::Home {}, strong { "PropCare" } }
                }
            }
            ul {
                li {
                    Link { class: nav_link_class("home"), to: Route::Home {}, "Home" }
                }
                if authenticated {
                    if let Some(role) = role {
                        li {
                            Link {
                                class: nav_link_class(role.as_str()),
                                to: home_route(Some(role)),
                                {role_nav_label(role)}
                            }
                        }
                    }
                    li {
                        a {
                            href: "#",
                            class: "secondary",
                            onclick: move |e| {
                                e.prevent_default();
                                sign_out(session);
                                nav.replace(Route::Home {});
                            },
                            "Log out"
                        }
                    }
                } else {
                    li {
                        Link { class: nav_link_class("register"), to: Route::Register {}, "Become a provider" }
                    }
                    li {
                        Link { class: nav_link_class("login"), to: Route::Login {}, "Log in" }
                    }
                }
            }
        }
    }
}

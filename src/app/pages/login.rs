//! Login page component.

use dioxus::prelude::*;

use crate::app::api::{login, LoginRequest};
use crate::app::auth::{home_route, sign_in, use_session};
use crate::app::components::{Layout, Notices};

/// Login page. Public-only in the route table, but an authenticated user
/// who lands here may still re-login; we never redirect them away.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut notices = use_signal(Vec::<String>::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        notices.set(Vec::new());
        let request = LoginRequest { email: email(), password: password() };
        spawn(async move {
            match login(&request).await {
                Ok(next) => {
                    let role = next.role;
                    sign_in(session, next);
                    nav.replace(home_route(role));
                }
                Err(err) => {
                    tracing::debug!(%err, "login rejected");
                    notices.set(vec!["Email or password is incorrect.".to_string()]);
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        Layout {
            title: "Log in".to_string(),
            nav_active: "login".to_string(),

            h1 { "Log in" }

            Notices { messages: notices() }

            form { onsubmit: on_submit,
                label { "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Log in" }
                }
            }
        }
    }
}

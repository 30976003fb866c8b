//! Session context and the navigation gate.
//!
//! The session lives in one app-level signal, injected via context so pages
//! and tests never reach for ambient storage themselves. The [`Gate`] layout
//! component evaluates every navigation against the route table and either
//! renders the matched page or redirects.

use dioxus::prelude::*;

use crate::access::{evaluate, GateDecision};
use crate::app::{route_access, Route};
use crate::session::{Role, Session, SessionStore};

#[cfg(target_arch = "wasm32")]
fn store() -> impl SessionStore {
    crate::session::LocalStorageStore
}

// SSR renders are per-request and anonymous; the client hydrates the real
// session from localStorage.
#[cfg(not(target_arch = "wasm32"))]
fn store() -> impl SessionStore {
    crate::session::MemoryStore::default()
}

/// Installs the session context at the app root.
pub fn use_session_provider() -> Signal<Session> {
    use_context_provider(|| Signal::new(store().load()))
}

/// The process-wide session signal. Read by the gate on every navigation,
/// written only by login/logout/activation.
pub fn use_session() -> Signal<Session> {
    use_context()
}

/// Records a fresh login/activation exchange.
pub fn sign_in(mut session: Signal<Session>, next: Session) {
    store().save(&next);
    session.set(next);
}

pub fn sign_out(mut session: Signal<Session>) {
    store().clear();
    session.set(Session::anonymous());
}

/// The role-appropriate landing route.
pub fn home_route(role: Option<Role>) -> Route {
    match role {
        Some(Role::Client) => Route::ClientDashboard {},
        Some(Role::Supervisor) => Route::ProviderDashboard {},
        Some(Role::Cleaner) => Route::CleanerDashboard {},
        Some(Role::Guest) => Route::GuestAccess {},
        None => Route::Home {},
    }
}

/// Layout component wrapping every route. Renders the outlet when the
/// session may see the page, otherwise redirects and renders nothing.
/// Navigation-only: the gate never mutates the session and never errors.
#[component]
pub fn Gate() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let nav = navigator();

    let decision = evaluate(&session.read(), &route_access(&route));
    match decision {
        GateDecision::Allowed => rsx! {
            Outlet::<Route> {}
        },
        GateDecision::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GateDecision::RedirectHome => {
            let home = home_route(session.read().role);
            nav.replace(home);
            rsx! {}
        }
    }
}

//! Dioxus fullstack application entry point.
//!
//! The root component installs the session context and the router; every
//! route sits behind the [`auth::Gate`] layout, which consults the
//! declarative [`route_access`] table on each navigation.

use dioxus::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod pages;

use crate::access::RouteAccess;
use crate::session::Role;
use auth::Gate;
use pages::{
    Activate, CleanerDashboard, ClientDashboard, GuestAccess, Home, Login, NotFound,
    ProviderDashboard, Register, ThankYou,
};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session context at app root (single source of truth for the gate)
    auth::use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Gate)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/activate/:token")]
    Activate { token: String },
    #[route("/register")]
    Register {},
    #[route("/register/thanks")]
    ThankYou {},
    #[route("/client")]
    ClientDashboard {},
    #[route("/provider")]
    ProviderDashboard {},
    #[route("/cleaner")]
    CleanerDashboard {},
    #[route("/guest")]
    GuestAccess {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Declared access per route. The gate reads this on every navigation.
pub fn route_access(route: &Route) -> RouteAccess {
    match route {
        Route::Home {} | Route::Register {} | Route::ThankYou {} | Route::NotFound { .. } => {
            RouteAccess::Public
        }
        Route::Login {} | Route::Activate { .. } => RouteAccess::PublicOnly,
        Route::ClientDashboard {} => RouteAccess::Roles(&[Role::Client]),
        Route::ProviderDashboard {} => RouteAccess::Roles(&[Role::Supervisor]),
        Route::CleanerDashboard {} => RouteAccess::Roles(&[Role::Cleaner]),
        Route::GuestAccess {} => RouteAccess::Roles(&[Role::Guest]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{evaluate, GateDecision};
    use crate::session::Session;

    fn dashboards() -> [(Route, Role); 4] {
        [
            (Route::ClientDashboard {}, Role::Client),
            (Route::ProviderDashboard {}, Role::Supervisor),
            (Route::CleanerDashboard {}, Role::Cleaner),
            (Route::GuestAccess {}, Role::Guest),
        ]
    }

    #[test]
    fn each_dashboard_admits_exactly_its_own_role() {
        for (route, owner) in dashboards() {
            let access = route_access(&route);
            for role in [Role::Client, Role::Supervisor, Role::Cleaner, Role::Guest] {
                let session = Session::authenticated("tok", role, "u1");
                let expected = if role == owner {
                    GateDecision::Allowed
                } else {
                    GateDecision::RedirectHome
                };
                assert_eq!(evaluate(&session, &access), expected, "{route:?} / {role:?}");
            }
        }
    }

    #[test]
    fn anonymous_dashboard_access_goes_to_login() {
        for (route, _) in dashboards() {
            assert_eq!(
                evaluate(&Session::anonymous(), &route_access(&route)),
                GateDecision::RedirectLogin
            );
        }
    }

    #[test]
    fn onboarding_routes_stay_public() {
        for route in [Route::Home {}, Route::Register {}, Route::ThankYou {}] {
            assert_eq!(
                evaluate(&Session::anonymous(), &route_access(&route)),
                GateDecision::Allowed
            );
        }
    }

    #[test]
    fn login_and_activation_render_even_when_authenticated() {
        let session = Session::authenticated("tok", Role::Client, "u1");
        for route in [Route::Login {}, Route::Activate { token: "abc".to_string() }] {
            assert_eq!(evaluate(&session, &route_access(&route)), GateDecision::Allowed);
        }
    }
}

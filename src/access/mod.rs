//! Route access control.
//!
//! One pure decision function drives the navigation gate: given the current
//! session and a page's declared access requirement, it yields render or
//! redirect. It never errors and never mutates the session; a malformed
//! session is just anonymous.

use crate::session::{Role, Session};

/// A page's declared access requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders for everyone.
    Public,
    /// Login/activation style pages. These make little sense for an
    /// already-authenticated user, but we deliberately do not redirect
    /// them away (re-login stays possible), so the gate treats these as
    /// a pass-through.
    PublicOnly,
    /// Any authenticated role.
    AnyAuthenticated,
    /// Only the listed roles.
    Roles(&'static [Role]),
}

/// Outcome of evaluating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    /// No token on a protected page.
    RedirectLogin,
    /// Authenticated, but the role is not allowed here.
    RedirectHome,
}

/// Decides whether the requested page may render.
pub fn evaluate(session: &Session, access: &RouteAccess) -> GateDecision {
    match access {
        RouteAccess::Public | RouteAccess::PublicOnly => GateDecision::Allowed,
        RouteAccess::AnyAuthenticated => {
            if session.is_authenticated() {
                GateDecision::Allowed
            } else {
                GateDecision::RedirectLogin
            }
        }
        RouteAccess::Roles(allowed) => {
            if !session.is_authenticated() {
                return GateDecision::RedirectLogin;
            }
            match session.role {
                Some(role) if allowed.contains(&role) => GateDecision::Allowed,
                _ => GateDecision::RedirectHome,
            }
        }
    }
}

//! PropCare - property-services management web app
//!
//! A multi-role (client, provider/supervisor, cleaner, guest) single-page
//! application over an external REST backend.
//!
//! This library provides:
//! - Role-gated routing with an explicit access-control gate
//! - The multi-step provider-onboarding wizard (validation + submission)
//! - Session persistence across the browser session
//! - Thin role dashboards over the backend's bookings, material requests,
//!   jobs, access codes, and notifications
//! - Web UI (Dioxus + Pico CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Pure core: gate decisions and the wizard engine (shared between targets)
pub mod access;
pub mod session;
pub mod wizard;

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;

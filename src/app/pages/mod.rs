//! Dioxus fullstack page components.

mod activate;
mod cleaner;
mod client;
mod guest;
mod home;
mod login;
mod not_found;
mod provider;
mod register;
mod thank_you;

pub use activate::Activate;
pub use cleaner::CleanerDashboard;
pub use client::ClientDashboard;
pub use guest::GuestAccess;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use provider::ProviderDashboard;
pub use register::Register;
pub use thank_you::ThankYou;

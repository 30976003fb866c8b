//! Shared UI components for the Dioxus fullstack web UI.

pub mod layout;
pub mod listing;
pub mod nav;
pub mod notice;

pub use layout::Layout;
pub use listing::{page_count, page_slice, status_badge, Pager, StatusBadge, PER_PAGE};
pub use nav::Nav;
pub use notice::Notices;

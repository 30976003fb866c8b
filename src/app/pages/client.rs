//! Client dashboard: bookings and notifications.

use dioxus::prelude::*;

use crate::app::api::{fetch_json_auth, Booking, NotificationItem};
use crate::app::auth::use_session;
use crate::app::components::{page_slice, Layout, Pager, StatusBadge, PER_PAGE};

/// Client dashboard page component.
#[component]
pub fn ClientDashboard() -> Element {
    let session = use_session();

    let bookings = use_resource(move || async move {
        let token = session.peek().token.clone().unwrap_or_default();
        fetch_json_auth::<Vec<Booking>>("/bookings", &token).await.ok()
    });

    let notifications = use_resource(move || async move {
        let token = session.peek().token.clone().unwrap_or_default();
        let path = format!("/notifications?audience={}", urlencoding::encode("client"));
        fetch_json_auth::<Vec<NotificationItem>>(&path, &token).await.ok()
    });

    let mut status_filter = use_signal(String::new);
    let page = use_signal(|| 1usize);

    let is_loading = bookings.read().is_none();
    let all_bookings = bookings.read().clone().flatten().unwrap_or_default();
    let filter = status_filter();
    let filtered: Vec<Booking> = all_bookings
        .iter()
        .filter(|b| filter.is_empty() || b.status.eq_ignore_ascii_case(&filter))
        .cloned()
        .collect();
    let visible = page_slice(&filtered, page(), PER_PAGE).to_vec();
    let notes = notifications.read().clone().flatten().unwrap_or_default();

    let bookings_content = if is_loading {
        rsx! {
            p { aria_busy: "true", "Loading bookings..." }
        }
    } else if filtered.is_empty() {
        rsx! {
            p { "No bookings yet. Your confirmed bookings show up here." }
        }
    } else {
        rsx! {
            table {
                thead {
                    tr {
                        th { "Service" }
                        th { "Property" }
                        th { "Date" }
                        th { "Status" }
                    }
                }
                tbody {
                    for booking in visible {
                        tr { key: "{booking.id}",
                            td { "{booking.service}" }
                            td { "{booking.property}" }
                            td { "{booking.date}" }
                            td { StatusBadge { status: booking.status.clone() } }
                        }
                    }
                }
            }
            Pager { page, total: filtered.len() }
        }
    };

    rsx! {
        Layout {
            title: "My Bookings".to_string(),
            nav_active: "client".to_string(),

            h1 { "My Bookings" }

            section {
                label { "Filter by status"
                    select {
                        onchange: move |e| status_filter.set(e.value()),
                        option { value: "", "All" }
                        option { value: "pending", "Pending" }
                        option { value: "confirmed", "Confirmed" }
                        option { value: "completed", "Completed" }
                        option { value: "cancelled", "Cancelled" }
                    }
                }
                {bookings_content}
            }

            section {
                h2 { "Notifications" }
                if notes.is_empty() {
                    p { class: "status-muted", "Nothing new." }
                } else {
                    ul {
                        for note in notes {
                            li { key: "{note.id}",
                                "{note.message} "
                                small { "{note.created_at}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

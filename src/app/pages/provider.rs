//! Provider/supervisor dashboard: material requests and assigned bookings.

use dioxus::prelude::*;

use crate::app::api::{fetch_json_auth, Booking, MaterialRequest};
use crate::app::auth::use_session;
use crate::app::components::{Layout, StatusBadge};

/// Provider dashboard page component.
#[component]
pub fn ProviderDashboard() -> Element {
    let session = use_session();

    // Both lists load concurrently; each section degrades on its own.
    let data = use_resource(move || async move {
        let token = session.peek().token.clone().unwrap_or_default();
        let (materials, bookings) = futures::join!(
            fetch_json_auth::<Vec<MaterialRequest>>("/materials/requests", &token),
            fetch_json_auth::<Vec<Booking>>("/bookings/assigned", &token),
        );
        (materials.ok(), bookings.ok())
    });

    let loaded = data.read().clone();
    let (materials, bookings) = loaded.unwrap_or((None, None));

    let materials_content = if let Some(items) = materials {
        if items.is_empty() {
            rsx! {
                p { "No open material requests." }
            }
        } else {
            rsx! {
                table {
                    thead {
                        tr {
                            th { "Item" }
                            th { "Quantity" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for request in items {
                            tr { key: "{request.id}",
                                td { "{request.item}" }
                                td { "{request.quantity}" }
                                td { StatusBadge { status: request.status.clone() } }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {
            p { aria_busy: "true", "Loading material requests..." }
        }
    };

    let bookings_content = if let Some(items) = bookings {
        if items.is_empty() {
            rsx! {
                p { "No bookings assigned to your team." }
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
                        for booking in items {
                            tr { key: "{booking.id}",
                                td { "{booking.service}" }
                                td { "{booking.property}" }
                                td { "{booking.date}" }
                                td { StatusBadge { status: booking.status.clone() } }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {
            p { aria_busy: "true", "Loading bookings..." }
        }
    };

    rsx! {
        Layout {
            title: "Provider Desk".to_string(),
            nav_active: "supervisor".to_string(),

            h1 { "Provider Desk" }

            section {
                h2 { "Material requests" }
                {materials_content}
            }

            section {
                h2 { "Assigned bookings" }
                {bookings_content}
            }
        }
    }
}

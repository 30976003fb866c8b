//! Cleaner dashboard: assigned jobs.

use dioxus::prelude::*;

use crate::app::api::{fetch_json_auth, CleanerJob};
use crate::app::auth::use_session;
use crate::app::components::{Layout, StatusBadge};

/// Cleaner dashboard page component.
#[component]
pub fn CleanerDashboard() -> Element {
    let session = use_session();

    let jobs = use_resource(move || async move {
        let token = session.peek().token.clone().unwrap_or_default();
        fetch_json_auth::<Vec<CleanerJob>>("/jobs/assigned", &token).await.ok()
    });

    let is_loading = jobs.read().is_none();
    let job_list = jobs.read().clone().flatten().unwrap_or_default();

    let content = if is_loading {
        rsx! {
            p { aria_busy: "true", "Loading your jobs..." }
        }
    } else if job_list.is_empty() {
        rsx! {
            p { "No jobs assigned today." }
        }
    } else {
        rsx! {
            table {
                thead {
                    tr {
                        th { "Property" }
                        th { "Scheduled" }
                        th { "Status" }
                    }
                }
                tbody {
                    for job in job_list {
                        tr { key: "{job.id}",
                            td { "{job.property}" }
                            td { "{job.scheduled_at}" }
                            td { StatusBadge { status: job.status.clone() } }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "My Jobs".to_string(),
            nav_active: "cleaner".to_string(),

            h1 { "My Jobs" }
            {content}
        }
    }
}

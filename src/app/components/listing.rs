//! List conveniences: client-side pagination and status badges.
//!
//! These are presentation helpers over server-returned lists, nothing more.

use dioxus::prelude::*;

pub const PER_PAGE: usize = 10;

/// Maps a backend status tag to a badge class.
pub fn status_badge(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "completed" | "approved" | "active" | "confirmed" => "status-ok",
        "pending" | "in_progress" | "scheduled" => "status-warn",
        "cancelled" | "rejected" | "expired" => "status-err",
        _ => "status-muted",
    }
}

pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// The slice of `items` shown on `page` (1-based). Out-of-range pages
/// clamp to the nearest valid page rather than erroring.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 || items.is_empty() {
        return items;
    }
    let page = page.clamp(1, page_count(items.len(), per_page));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Colored status tag.
#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        span { class: status_badge(&status), "{status}" }
    }
}

/// Previous/next pager over a client-side page signal.
#[component]
pub fn Pager(mut page: Signal<usize>, total: usize) -> Element {
    let pages = page_count(total, PER_PAGE);
    if pages <= 1 {
        return rsx! {};
    }
    let current = page().clamp(1, pages);
    rsx! {
        div { class: "pager",
            button {
                class: "secondary",
                disabled: current == 1,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                "Previous"
            }
            small { "Page {current} of {pages}" }
            button {
                class: "secondary",
                disabled: current == pages,
                onclick: move |_| page.set((current + 1).min(pages)),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_maps_known_statuses() {
        assert_eq!(status_badge("completed"), "status-ok");
        assert_eq!(status_badge("Pending"), "status-warn");
        assert_eq!(status_badge("CANCELLED"), "status-err");
        assert_eq!(status_badge("weird"), "status-muted");
    }

    #[test]
    fn page_slice_clamps_out_of_range_pages() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &items[20..25]);
        // Page 0 and page 99 clamp instead of panicking
        assert_eq!(page_slice(&items, 0, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 99, 10), &items[20..25]);
    }

    #[test]
    fn page_count_never_reports_zero_pages() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }
}

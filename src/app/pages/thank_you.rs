//! Post-registration thank-you page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

/// Terminal page after a successful provider registration.
#[component]
pub fn ThankYou() -> Element {
    rsx! {
        Layout {
            title: "Thank you".to_string(),
            nav_active: "register".to_string(),

            h1 { "Thank you for registering" }
            p {
                "We received your application. Our team reviews every new "
                "provider and will email you an activation link."
            }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}

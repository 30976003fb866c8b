//! Provider onboarding wizard page.
//!
//! All sequencing, validation, and submission rules live in
//! [`crate::wizard`]; this page binds inputs to the draft and renders
//! whichever step the engine says is on screen.

use dioxus::prelude::*;

use crate::app::api::{fetch_cities, HttpRegistrationGateway};
use crate::app::components::{Layout, Notices};
use crate::app::Route;
use crate::wizard::draft::{City, ExperienceAnswer};
use crate::wizard::{NextOutcome, RegistrationGateway, Step, Wizard, WizardState};

/// Onboarding wizard page component.
#[component]
pub fn Register() -> Element {
    let mut wizard = use_signal(Wizard::new);
    let nav = navigator();

    // City options for the address step (built-in fallback when the
    // provider is unavailable).
    let cities = use_resource(|| async { fetch_cities().await });

    // Leave for the thank-you page exactly once, after the terminal state.
    use_effect(move || {
        if wizard.read().state() == WizardState::Submitted {
            nav.replace(Route::ThankYou {});
        }
    });

    let on_next = move |_: MouseEvent| {
        let outcome = wizard.write().go_next();
        if let NextOutcome::Submit(payload) = outcome {
            spawn(async move {
                let result = HttpRegistrationGateway.submit(&payload).await;
                wizard.write().finish_submit(result);
            });
        }
    };

    let current = wizard.read().current_step();
    let submitting = wizard.read().is_submitting();
    let notices = wizard.read().notices().to_vec();
    let city_list = cities.read().clone().unwrap_or_default();

    let step_content = match current {
        Some(Step::Contact) => rsx! { ContactStep { wizard } },
        Some(Step::Address) => rsx! { AddressStep { wizard, cities: city_list } },
        Some(Step::Experience) => rsx! { ExperienceStep { wizard } },
        Some(Step::Schedule) => rsx! { ScheduleStep { wizard } },
        // Submitted; the effect above is already navigating away.
        None => rsx! {},
    };

    let next_label = match (current, submitting) {
        (_, true) => "Submitting...",
        (Some(Step::Schedule), false) => "Submit registration",
        _ => "Next",
    };

    rsx! {
        Layout {
            title: "Become a provider".to_string(),
            nav_active: "register".to_string(),

            h1 { "Become a provider" }

            // Step chips: completed steps are revisitable, later ones are not.
            div { class: "step-chips",
                for step in Step::ALL {
                    button {
                        key: "{step.number()}",
                        r#type: "button",
                        class: if current == Some(step) { "active" } else { "secondary" },
                        onclick: move |_| { wizard.write().jump_to(step); },
                        "{step.number()}. {step.title()}"
                    }
                }
            }

            Notices { messages: notices }

            form { onsubmit: move |e| e.prevent_default(),
                {step_content}

                div { class: "wizard-controls",
                    button {
                        r#type: "button",
                        class: "secondary",
                        disabled: current == Some(Step::Contact) || submitting,
                        onclick: move |_| wizard.write().go_back(),
                        "Back"
                    }
                    button {
                        r#type: "button",
                        disabled: submitting,
                        onclick: on_next,
                        "{next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn ContactStep(mut wizard: Signal<Wizard>) -> Element {
    let draft = wizard.read().draft.clone();
    rsx! {
        fieldset {
            label { "First name"
                input {
                    r#type: "text",
                    value: "{draft.first_name}",
                    oninput: move |e| wizard.write().draft.first_name = e.value(),
                }
            }
            label { "Last name"
                input {
                    r#type: "text",
                    value: "{draft.last_name}",
                    oninput: move |e| wizard.write().draft.last_name = e.value(),
                }
            }
            label { "Email"
                input {
                    r#type: "email",
                    value: "{draft.email}",
                    oninput: move |e| wizard.write().draft.email = e.value(),
                }
            }
            label { "Phone"
                input {
                    r#type: "tel",
                    value: "{draft.phone}",
                    oninput: move |e| wizard.write().draft.phone = e.value(),
                }
            }
        }
    }
}

#[component]
fn AddressStep(mut wizard: Signal<Wizard>, cities: Vec<City>) -> Element {
    let draft = wizard.read().draft.clone();
    rsx! {
        fieldset {
            label { "Address"
                input {
                    r#type: "text",
                    value: "{draft.address}",
                    oninput: move |e| wizard.write().draft.address = e.value(),
                }
            }
            label { "Postcode"
                input {
                    r#type: "text",
                    value: "{draft.postcode}",
                    oninput: move |e| wizard.write().draft.postcode = e.value(),
                }
            }
            label { "City"
                select {
                    value: "{draft.city_id}",
                    onchange: move |e| wizard.write().draft.city_id = e.value(),
                    option { value: "", "Select a city" }
                    for city in cities {
                        option {
                            key: "{city.id}",
                            value: "{city.id}",
                            selected: draft.city_id == city.id.to_string(),
                            "{city.name}"
                        }
                    }
                }
            }
            label { "Region"
                input {
                    r#type: "text",
                    value: "{draft.region}",
                    oninput: move |e| wizard.write().draft.region = e.value(),
                }
            }
            div { class: "grid",
                label { "Latitude (optional)"
                    input {
                        r#type: "text",
                        value: "{draft.latitude}",
                        oninput: move |e| wizard.write().draft.latitude = e.value(),
                    }
                }
                label { "Longitude (optional)"
                    input {
                        r#type: "text",
                        value: "{draft.longitude}",
                        oninput: move |e| wizard.write().draft.longitude = e.value(),
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceStep(mut wizard: Signal<Wizard>) -> Element {
    let draft = wizard.read().draft.clone();
    rsx! {
        fieldset {
            legend { "Have you worked for a cleaning company before?" }
            label {
                input {
                    r#type: "radio",
                    name: "experience",
                    checked: draft.experience == ExperienceAnswer::YesWithCompany,
                    onchange: move |_| {
                        wizard.write().draft.experience = ExperienceAnswer::YesWithCompany;
                    },
                }
                "Yes, with a company"
            }
            label {
                input {
                    r#type: "radio",
                    name: "experience",
                    checked: draft.experience == ExperienceAnswer::No,
                    // Answering "no" skips straight to the final step.
                    onchange: move |_| wizard.write().answer_no_and_skip(),
                }
                "No prior experience"
            }
            if draft.experience == ExperienceAnswer::YesWithCompany {
                label { "Company"
                    input {
                        r#type: "text",
                        value: "{draft.company}",
                        oninput: move |e| wizard.write().draft.company = e.value(),
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleStep(mut wizard: Signal<Wizard>) -> Element {
    let draft = wizard.read().draft.clone();
    rsx! {
        fieldset {
            label { "When can you start?"
                input {
                    r#type: "date",
                    value: "{draft.start_date}",
                    oninput: move |e| wizard.write().draft.start_date = e.value(),
                }
            }
            small { "We confirm your details and get back to you within two working days." }
        }
    }
}

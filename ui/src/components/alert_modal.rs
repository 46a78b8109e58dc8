use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_alert::use_alert;
use crate::hooks::use_alert::AlertKind;
use dioxus::prelude::*;

/// Renders the current alert, if any, until the operator dismisses it.
#[component]
pub fn AlertModal() -> Element {
    let mut alert = use_alert();
    let current = alert.current();
    let Some(shown) = current() else {
        return rsx! {};
    };

    let (icon, button_type) = match shown.kind {
        AlertKind::Success => ("✅", ButtonType::Primary),
        AlertKind::Warning => ("⚠️", ButtonType::Secondary),
        AlertKind::Failure => ("❌", ButtonType::Contrast),
    };

    rsx! {
        dialog {
            open: true,
            article {
                header {
                    h3 { style: "margin-bottom: 0;", "{icon} {shown.title}" }
                }
                p { style: "white-space: pre-wrap;", "{shown.message}" }
                footer {
                    Button {
                        button_type,
                        on_click: move |_| alert.dismiss(),
                        "OK"
                    }
                }
            }
        }
    }
}

//! Radio group switching the heatmap between max and min temperatures.

use crate::state::AppState;
use dioxus::prelude::*;
use thm_core::mode::Mode;

#[derive(Props, Clone, PartialEq)]
pub struct ModeToggleProps {
    /// Show the "Current Mode: ..." line under the radios
    #[props(default = true)]
    pub show_label: bool,
}

/// Max/min radio buttons bound to `AppState::mode`.
#[component]
pub fn ModeToggle(props: ModeToggleProps) -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.mode)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Mode>() {
        Ok(mode) => state.mode.set(mode),
        Err(e) => log::warn!("[THM] mode toggle: {}", e),
    };

    let options = [Mode::Max, Mode::Min].map(|m| (m, m.value(), m.label()));
    let current_label = current.label();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            for (mode, value, caption) in options {
                label {
                    key: "{mode}",
                    style: "font-weight: bold;",
                    input {
                        r#type: "radio",
                        name: "tempType",
                        value: "{value}",
                        checked: current == mode,
                        onchange: on_change,
                    }
                    " {caption}"
                }
            }
        }
        if props.show_label {
            p {
                id: "switch_val",
                style: "margin: 0 0 8px 0; font-size: 13px;",
                "Current Mode: {current_label}"
            }
        }
    }
}

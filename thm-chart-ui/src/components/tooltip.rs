//! Tooltip overlay that follows the hovered cell.

use crate::state::AppState;
use dioxus::prelude::*;

/// Offset from the pointer, in pixels.
const POINTER_OFFSET: f64 = 10.0;

/// Absolutely positioned box showing `AppState::hover`; renders nothing when
/// no cell is hovered.
#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let hover = state.hover.read().clone().map(|h| {
        (h.text, h.page_x + POINTER_OFFSET, h.page_y + POINTER_OFFSET)
    });

    rsx! {
        if let Some((text, left, top)) = hover {
            div {
                style: "position: absolute; left: {left}px; top: {top}px; background: white; padding: 5px; border-radius: 5px; box-shadow: 0 1px 4px rgba(0,0,0,0.3); font-size: 12px; pointer-events: none;",
                "{text}"
            }
        }
    }
}

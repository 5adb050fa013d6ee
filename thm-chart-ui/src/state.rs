//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use thm_core::heatmap::Heatmap;
use thm_core::mode::Mode;

/// Text and page position of the visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub text: String,
    pub page_x: f64,
    pub page_y: f64,
}

/// Shared application state for all THM heatmap apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Aggregated model (None until loaded, and forever if the load failed)
    pub heatmap: Signal<Option<Heatmap>>,
    /// Whether the dataset is still being fetched
    pub loading: Signal<bool>,
    /// Temperature field driving cell colour
    pub mode: Signal<Mode>,
    /// Tooltip for the cell under the pointer
    pub hover: Signal<Option<Hover>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            heatmap: Signal::new(None),
            loading: Signal::new(true),
            mode: Signal::new(Mode::default()),
            hover: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared Dioxus components and data loading for THM heatmap apps.
//!
//! This crate provides:
//! - `loader`: fetches the temperature CSV through the browser and builds a `Heatmap`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (mode toggle, heatmap SVG, legend, tooltip)

pub mod components;
pub mod loader;
pub mod state;

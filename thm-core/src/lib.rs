//! Core types for the daily temperature heatmap.
//!
//! - `record`: CSV parsing into [`record::DailyRecord`]s
//! - `aggregate`: year -> month roll-ups and recent-year filtering
//! - `heatmap`: configuration, scales and the per-mode render model
//!
//! Nothing here touches the DOM, so the whole pipeline runs in native tests.

pub mod aggregate;
pub mod color;
pub mod grid;
pub mod heatmap;
pub mod legend;
pub mod mode;
pub mod record;
pub mod scale;
pub mod sparkline;

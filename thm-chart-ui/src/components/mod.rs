//! Reusable Dioxus RSX components for THM heatmap apps.

mod chart_container;
mod chart_header;
mod color_legend;
mod heatmap_chart;
mod loading_spinner;
mod mode_toggle;
mod tooltip;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use color_legend::ColorLegend;
pub use heatmap_chart::HeatmapChart;
pub use loading_spinner::LoadingSpinner;
pub use mode_toggle::ModeToggle;
pub use tooltip::Tooltip;

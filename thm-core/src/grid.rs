use crate::aggregate::{AggregationIndex, DailyGroups};
use crate::mode::Mode;
use crate::record::DailyRecord;
use thm_utils::{dates, numbers};

/// Rows of the grid, January first.
pub const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// One (year, month) position of the heatmap, with or without data.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub year: i32,
    pub month: u32,
    /// The field selected by the mode; `None` renders as an empty cell.
    pub display_value: Option<f64>,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
    /// Days of the month, filled only for sparkline grids.
    pub daily: Vec<DailyRecord>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.display_value.is_none()
    }

    pub fn has_data(&self) -> bool {
        self.max_temperature.is_some() || self.min_temperature.is_some()
    }

    /// Hover text for the cell.
    pub fn tooltip(&self) -> String {
        let date = dates::format_year_month(self.year, self.month);
        if !self.has_data() {
            return format!("Date: {}; No data", date);
        }
        format!(
            "Date: {}; Max: {}; Min: {}",
            date,
            numbers::format_temperature(self.max_temperature),
            numbers::format_temperature(self.min_temperature)
        )
    }
}

/// Every (year, month) pair of `years x MONTHS`, year-major.
///
/// Always yields `years.len() * 12` cells; pairs missing from `index` come out
/// empty rather than being dropped.
pub fn build_cells(
    years: &[i32],
    index: &AggregationIndex,
    groups: Option<&DailyGroups>,
    mode: Mode,
) -> Vec<GridCell> {
    years
        .iter()
        .flat_map(|&year| MONTHS.iter().map(move |&month| (year, month)))
        .map(|(year, month)| {
            let aggregate = index.get(year, month).copied().unwrap_or_default();
            GridCell {
                year,
                month,
                display_value: mode.select(&aggregate),
                max_temperature: aggregate.max_temperature,
                min_temperature: aggregate.min_temperature,
                daily: groups
                    .map(|g| g.get(year, month).to_vec())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

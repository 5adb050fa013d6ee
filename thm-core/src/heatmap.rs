//! Year x month heatmap: configuration, the aggregated model built once per
//! load, and the pure render step that turns it into shapes for a given mode.
//!
//! # Usage
//!
//! ```rust
//! use thm_core::heatmap::{Heatmap, HeatmapConfig};
//! use thm_core::mode::Mode;
//! use thm_core::record::parse_csv;
//!
//! let csv = "date,max_temperature,min_temperature\n\
//!            1996-12-31,17,8\n1997-01-05,10,2\n1997-01-20,15,-1\n";
//! let records = parse_csv(csv).unwrap();
//! let heatmap = Heatmap::new(&records, HeatmapConfig::monthly_extremes());
//!
//! let rendered = heatmap.render(Mode::Max);
//! // the first observed year is left out of the monthly extremes grid
//! assert_eq!(rendered.year_span, Some((1997, 1997)));
//! assert_eq!(rendered.cells.len(), 12);
//! assert_eq!(rendered.cells[0].tooltip, "Date: 1997-01; Max: 15; Min: -1");
//! ```

use crate::aggregate::{
    distinct_years, filter_recent_years, temperature_extent, AggregationIndex, DailyGroups, Extent,
};
use crate::color::ColorScheme;
use crate::grid::{build_cells, GridCell, MONTHS};
use crate::legend::{Legend, LEGEND_CELLS};
use crate::mode::Mode;
use crate::record::DailyRecord;
use crate::scale::{BandScale, SequentialScale};
use crate::sparkline::Sparkline;
use thm_utils::dates;

/// Fill of cells without a value.
pub const EMPTY_CELL_FILL: &str = "white";

/// How many trailing years the sparkline grid keeps.
pub const RECENT_YEAR_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 50.0,
            right: 50.0,
            bottom: 50.0,
            left: 100.0,
        }
    }
}

/// Which values set the colour domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Lowest daily min to highest daily max, the same for both modes.
    Shared,
    /// Extent of the selected field only, recomputed per mode.
    PerMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Band padding, inner and outer.
    pub padding: f64,
    pub scheme: ColorScheme,
    pub domain: DomainPolicy,
    /// Keep only the rows of this many most recent years.
    pub recent_years: Option<usize>,
    /// Leave the earliest observed year out of the grid. The source data
    /// starts with a partial year.
    pub skip_first_year: bool,
    pub sparklines: bool,
}

impl HeatmapConfig {
    /// One coloured rectangle per month, every year but the first.
    pub fn monthly_extremes() -> Self {
        HeatmapConfig {
            width: 800.0,
            height: 500.0,
            margin: Margin::default(),
            padding: 0.2,
            scheme: ColorScheme::Spectral,
            domain: DomainPolicy::Shared,
            recent_years: None,
            skip_first_year: true,
            sparklines: false,
        }
    }

    /// Last ten years with daily min/max sparklines in every cell.
    pub fn decade_sparklines() -> Self {
        HeatmapConfig {
            width: 900.0,
            height: 600.0,
            margin: Margin::default(),
            padding: 0.2,
            scheme: ColorScheme::Spectral,
            domain: DomainPolicy::PerMode,
            recent_years: Some(RECENT_YEAR_COUNT),
            skip_first_year: false,
            sparklines: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Centre of the band along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub year: i32,
    pub month: u32,
    pub rect: CellRect,
    pub fill: String,
    pub empty: bool,
    pub tooltip: String,
    pub sparkline: Option<Sparkline>,
}

/// Everything the page draws for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHeatmap {
    pub width: f64,
    pub height: f64,
    pub mode: Mode,
    pub mode_label: String,
    /// First and last year on the grid.
    pub year_span: Option<(i32, i32)>,
    /// Pixel span of the year axis (left, right).
    pub x_range: (f64, f64),
    /// Pixel span of the month axis (top, bottom).
    pub y_range: (f64, f64),
    pub year_ticks: Vec<AxisTick>,
    pub month_ticks: Vec<AxisTick>,
    pub cells: Vec<RenderedCell>,
    pub legend: Option<Legend>,
}

/// Aggregated, read-only model of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    config: HeatmapConfig,
    records: Vec<DailyRecord>,
    years: Vec<i32>,
    index: AggregationIndex,
    groups: Option<DailyGroups>,
    x: BandScale<i32>,
    y: BandScale<u32>,
}

impl Heatmap {
    pub fn new(records: &[DailyRecord], config: HeatmapConfig) -> Self {
        let records = match config.recent_years {
            Some(count) => filter_recent_years(records, count),
            None => records.to_vec(),
        };

        let mut years = distinct_years(&records);
        if config.skip_first_year && !years.is_empty() {
            years.remove(0);
        }

        let index = AggregationIndex::build(&records);
        let groups = config.sparklines.then(|| DailyGroups::build(&records));

        let m = config.margin;
        let x = BandScale::new(years.clone(), (m.left, config.width - m.right), config.padding);
        let y = BandScale::new(MONTHS.to_vec(), (m.top, config.height - m.bottom), config.padding);

        log::info!(
            "[THM] heatmap: {} records over {} years, {} month aggregates",
            records.len(),
            years.len(),
            index.len()
        );

        Heatmap {
            config,
            records,
            years,
            index,
            groups,
            x,
            y,
        }
    }

    /// Observed extent that sets the colour domain for `mode`.
    fn color_extent(&self, mode: Mode) -> Option<Extent> {
        match self.config.domain {
            DomainPolicy::Shared => temperature_extent(&self.records),
            DomainPolicy::PerMode => Extent::of(self.records.iter().filter_map(|r| mode.field(r))),
        }
    }

    fn color_scale(&self, mode: Mode) -> Option<SequentialScale> {
        self.color_extent(mode)
            .map(|extent| SequentialScale::for_extent(self.config.scheme, extent))
    }

    fn cells(&self, mode: Mode) -> Vec<GridCell> {
        build_cells(&self.years, &self.index, self.groups.as_ref(), mode)
    }

    /// Lay out and colour every cell for `mode`. Positions depend only on the
    /// years, so toggling the mode changes fills, text and strokes alone.
    pub fn render(&self, mode: Mode) -> RenderedHeatmap {
        let extent = self.color_extent(mode);
        let scale = self.color_scale(mode);
        let bandwidth = self.x.bandwidth();
        let band_height = self.y.bandwidth();

        let cells = self
            .cells(mode)
            .into_iter()
            .filter_map(|cell| {
                let rect = CellRect {
                    x: self.x.position(&cell.year)?,
                    y: self.y.position(&cell.month)?,
                    width: bandwidth,
                    height: band_height,
                };
                let fill = match (cell.display_value, scale.as_ref()) {
                    (Some(value), Some(scale)) => scale.color(value).to_hex(),
                    _ => EMPTY_CELL_FILL.to_string(),
                };
                let sparkline = if self.config.sparklines && !cell.is_empty() {
                    Sparkline::build(&cell.daily, bandwidth, band_height, mode)
                } else {
                    None
                };
                Some(RenderedCell {
                    year: cell.year,
                    month: cell.month,
                    rect,
                    empty: cell.is_empty(),
                    tooltip: cell.tooltip(),
                    fill,
                    sparkline,
                })
            })
            .collect();

        let year_ticks = self
            .years
            .iter()
            .filter_map(|year| {
                Some(AxisTick {
                    position: self.x.center(year)?,
                    label: year.to_string(),
                })
            })
            .collect();
        let month_ticks = MONTHS
            .iter()
            .filter_map(|month| {
                Some(AxisTick {
                    position: self.y.center(month)?,
                    label: dates::month_name(*month)?.to_string(),
                })
            })
            .collect();

        let m = self.config.margin;
        RenderedHeatmap {
            width: self.config.width,
            height: self.config.height,
            mode,
            mode_label: format!("Current Mode: {}", mode.label()),
            year_span: self.years.first().zip(self.years.last()).map(|(a, b)| (*a, *b)),
            x_range: (m.left, self.config.width - m.right),
            y_range: (m.top, self.config.height - m.bottom),
            year_ticks,
            month_ticks,
            cells,
            legend: scale
                .zip(extent)
                .map(|(scale, extent)| Legend::new(&scale, extent, LEGEND_CELLS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_csv;
    use chrono::NaiveDate;

    const SAMPLE_CSV: &str = include_str!("../../fixtures/temperature_daily_sample.csv");

    fn record(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), Some(max), Some(min))
    }

    fn sample() -> Heatmap {
        let records = parse_csv(SAMPLE_CSV).unwrap();
        Heatmap::new(&records, HeatmapConfig::monthly_extremes())
    }

    fn cell(rendered: &RenderedHeatmap, year: i32, month: u32) -> &RenderedCell {
        rendered
            .cells
            .iter()
            .find(|c| c.year == year && c.month == month)
            .unwrap()
    }

    #[test]
    fn test_first_year_is_skipped() {
        let heatmap = sample();
        assert_eq!(heatmap.years, vec![1997, 1998]);
        let rendered = heatmap.render(Mode::Max);
        assert!(rendered.cells.iter().all(|c| c.year != 1996));
        assert_eq!(rendered.year_ticks.len(), 2);
        assert_eq!(rendered.year_ticks[0].label, "1997");
    }

    #[test]
    fn test_cell_count_is_years_times_twelve() {
        let heatmap = sample();
        for mode in [Mode::Max, Mode::Min] {
            assert_eq!(heatmap.render(mode).cells.len(), heatmap.years.len() * 12);
        }
    }

    #[test]
    fn test_shared_domain_includes_skipped_year_rows() {
        let heatmap = sample();
        let extent = heatmap.color_extent(Mode::Max).unwrap();
        assert_eq!(extent, Extent { min: -1.0, max: 35.0 });
        assert_eq!(heatmap.color_extent(Mode::Min), Some(extent));
    }

    #[test]
    fn test_empty_cells_use_empty_fill() {
        let rendered = sample().render(Mode::Max);
        let may = cell(&rendered, 1997, 5);
        assert!(may.empty);
        assert_eq!(may.fill, EMPTY_CELL_FILL);
        assert_eq!(may.tooltip, "Date: 1997-05; No data");

        let july = cell(&rendered, 1998, 7);
        assert!(!july.empty);
        // 35 is the hottest value of the domain: the red end of Spectral
        assert_eq!(july.fill, "#9e0142");
    }

    #[test]
    fn test_absent_field_renders_as_no_data_for_that_mode() {
        let heatmap = sample();
        let max = heatmap.render(Mode::Max);
        let min = heatmap.render(Mode::Min);
        // March 1997 only has unparseable maxima
        assert_eq!(cell(&max, 1997, 3).fill, EMPTY_CELL_FILL);
        assert_ne!(cell(&min, 1997, 3).fill, EMPTY_CELL_FILL);
        assert_eq!(cell(&min, 1997, 3).tooltip, "Date: 1997-03; Max: n/a; Min: 6");
    }

    #[test]
    fn test_toggle_twice_renders_identically() {
        let heatmap = sample();
        let mode = Mode::Max;
        let first = heatmap.render(mode);
        let toggled = heatmap.render(mode.toggled());
        let back = heatmap.render(mode.toggled().toggled());
        assert_eq!(first, back);
        assert_ne!(first, toggled);
    }

    #[test]
    fn test_layout_stable_across_modes() {
        let heatmap = sample();
        let max = heatmap.render(Mode::Max);
        let min = heatmap.render(Mode::Min);
        for (a, b) in max.cells.iter().zip(min.cells.iter()) {
            assert_eq!((a.year, a.month, a.rect), (b.year, b.month, b.rect));
        }
        assert_eq!(max.year_ticks, min.year_ticks);
        assert_eq!(max.mode_label, "Current Mode: Max Temperatures");
        assert_eq!(min.mode_label, "Current Mode: Min Temperatures");
    }

    #[test]
    fn test_cells_inside_plot_area() {
        let rendered = sample().render(Mode::Max);
        for c in &rendered.cells {
            assert!(c.rect.x >= rendered.x_range.0);
            assert!(c.rect.x + c.rect.width <= rendered.x_range.1 + 1e-9);
            assert!(c.rect.y >= rendered.y_range.0);
            assert!(c.rect.y + c.rect.height <= rendered.y_range.1 + 1e-9);
        }
        assert_eq!(rendered.month_ticks.len(), 12);
        assert_eq!(rendered.month_ticks[0].label, "January");
        assert_eq!(rendered.month_ticks[11].label, "December");
    }

    #[test]
    fn test_decade_variant_keeps_last_ten_years() {
        let records: Vec<DailyRecord> = (2001..=2020)
            .flat_map(|y| {
                vec![
                    record(y, 1, 3, 10.0 + (y - 2000) as f64, -5.0),
                    record(y, 7, 14, 30.0 + (y - 2000) as f64, 15.0),
                ]
            })
            .collect();
        let heatmap = Heatmap::new(&records, HeatmapConfig::decade_sparklines());
        assert!(heatmap.records.iter().all(|r| r.year >= 2011));
        assert_eq!(heatmap.years, (2011..=2020).collect::<Vec<_>>());
        assert_eq!(heatmap.render(Mode::Max).year_span, Some((2011, 2020)));
        assert_eq!(heatmap.render(Mode::Max).cells.len(), 120);
    }

    #[test]
    fn test_decade_variant_domain_follows_mode() {
        let records = vec![
            record(2019, 1, 3, 10.0, -5.0),
            record(2020, 7, 14, 38.0, 20.0),
        ];
        let heatmap = Heatmap::new(&records, HeatmapConfig::decade_sparklines());
        assert_eq!(
            heatmap.color_extent(Mode::Max),
            Some(Extent { min: 10.0, max: 38.0 })
        );
        assert_eq!(
            heatmap.color_extent(Mode::Min),
            Some(Extent { min: -5.0, max: 20.0 })
        );
        let min = heatmap.render(Mode::Min);
        // the warmest minimum is the red end of its own domain
        assert_eq!(cell(&min, 2020, 7).fill, "#9e0142");
    }

    #[test]
    fn test_sparklines_only_in_cells_with_data() {
        let records = vec![
            record(2020, 7, 1, 30.0, 18.0),
            record(2020, 7, 15, 34.0, 21.0),
        ];
        let heatmap = Heatmap::new(&records, HeatmapConfig::decade_sparklines());
        let rendered = heatmap.render(Mode::Max);
        assert!(cell(&rendered, 2020, 7).sparkline.is_some());
        assert!(cell(&rendered, 2020, 8).sparkline.is_none());

        let basic = Heatmap::new(&records, HeatmapConfig {
            skip_first_year: false,
            ..HeatmapConfig::monthly_extremes()
        });
        assert!(basic.render(Mode::Max).cells.iter().all(|c| c.sparkline.is_none()));
    }

    #[test]
    fn test_sparkline_drawn_when_minima_absent() {
        let records = vec![
            DailyRecord::new(NaiveDate::from_ymd_opt(2020, 7, 1).unwrap(), Some(30.0), None),
            DailyRecord::new(NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(), Some(32.0), None),
        ];
        let heatmap = Heatmap::new(&records, HeatmapConfig::decade_sparklines());
        let max = heatmap.render(Mode::Max);
        let july = cell(&max, 2020, 7);
        assert!(!july.empty);
        let spark = july.sparkline.as_ref().unwrap();
        assert!(!spark.max_path.is_empty());
        assert!(spark.min_path.is_empty());

        // no minima at all: empty in min mode, so no sparkline either
        let min = heatmap.render(Mode::Min);
        assert!(cell(&min, 2020, 7).empty);
        assert!(cell(&min, 2020, 7).sparkline.is_none());
    }

    #[test]
    fn test_legend_follows_domain() {
        let rendered = sample().render(Mode::Max);
        let legend = rendered.legend.unwrap();
        assert_eq!(legend.swatches.first().unwrap().value, -1.0);
        assert_eq!(legend.swatches.last().unwrap().value, 35.0);
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let heatmap = Heatmap::new(&[], HeatmapConfig::monthly_extremes());
        let rendered = heatmap.render(Mode::Max);
        assert!(rendered.cells.is_empty());
        assert!(rendered.year_ticks.is_empty());
        assert!(rendered.legend.is_none());
        assert_eq!(rendered.year_span, None);
    }
}

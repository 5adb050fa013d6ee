use crate::aggregate::temperature_extent;
use crate::mode::Mode;
use crate::record::DailyRecord;
use crate::scale::LinearScale;

/// Gap between a sparkline and the edge of its cell, in pixels.
pub const SPARKLINE_INSET: f64 = 3.0;
/// Local x domain: day of month.
pub const DAY_DOMAIN: (f64, f64) = (1.0, 31.0);
pub const SPARKLINE_STROKE_WIDTH: f64 = 2.0;

/// Daily min and max polylines for one cell, in cell-local coordinates.
///
/// The y axis spans the cell's own [min, max], so every cell uses its full
/// height regardless of the global colour domain. When one field is absent for
/// the whole month its path is empty and the other line alone sets the range.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub min_path: String,
    pub max_path: String,
    pub min_stroke: &'static str,
    pub max_stroke: &'static str,
    pub stroke_width: f64,
}

impl Sparkline {
    /// `None` when the month has no usable temperatures.
    pub fn build(daily: &[DailyRecord], width: f64, height: f64, mode: Mode) -> Option<Sparkline> {
        let extent = temperature_extent(daily)?;

        let x = LinearScale::new(DAY_DOMAIN, (SPARKLINE_INSET, width - SPARKLINE_INSET));
        let y = LinearScale::new(
            (extent.min, extent.max),
            (height - SPARKLINE_INSET, SPARKLINE_INSET),
        );
        let (min_stroke, max_stroke) = strokes(mode);

        Some(Sparkline {
            min_path: line_path(daily.iter().map(|d| (d.day, d.min_temperature)), &x, &y),
            max_path: line_path(daily.iter().map(|d| (d.day, d.max_temperature)), &x, &y),
            min_stroke,
            max_stroke,
            stroke_width: SPARKLINE_STROKE_WIDTH,
        })
    }
}

/// (min line, max line) stroke colours; they swap palettes with the mode so
/// the lines stay readable over either fill.
pub fn strokes(mode: Mode) -> (&'static str, &'static str) {
    match mode {
        Mode::Max => ("skyblue", "green"),
        Mode::Min => ("cyan", "crimson"),
    }
}

/// SVG path data through the defined points. An absent value ends the
/// current segment and the next defined point starts a new one.
fn line_path<I>(points: I, x: &LinearScale, y: &LinearScale) -> String
where
    I: IntoIterator<Item = (u32, Option<f64>)>,
{
    let mut path = String::new();
    let mut pen_down = false;
    for (day, value) in points {
        match value {
            Some(v) => {
                let command = if pen_down { 'L' } else { 'M' };
                path.push(command);
                path.push_str(&format!(
                    "{},{}",
                    coordinate(x.scale(day as f64)),
                    coordinate(y.scale(v))
                ));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

fn coordinate(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, max: Option<f64>, min: Option<f64>) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(2016, 1, d).unwrap(), max, min)
    }

    #[test]
    fn test_paths_span_local_range() {
        let daily = vec![day(1, Some(10.0), Some(0.0)), day(31, Some(20.0), Some(5.0))];
        let spark = Sparkline::build(&daily, 66.0, 46.0, Mode::Max).unwrap();
        // x: [1, 31] -> [3, 63]; y: [0, 20] -> [43, 3]
        assert_eq!(spark.min_path, "M3,43L63,33");
        assert_eq!(spark.max_path, "M3,23L63,3");
    }

    #[test]
    fn test_each_cell_normalised_independently() {
        let cold = vec![day(1, Some(-5.0), Some(-10.0)), day(2, Some(-4.0), Some(-9.0))];
        let warm = vec![day(1, Some(35.0), Some(30.0)), day(2, Some(36.0), Some(31.0))];
        let a = Sparkline::build(&cold, 66.0, 46.0, Mode::Max).unwrap();
        let b = Sparkline::build(&warm, 66.0, 46.0, Mode::Max).unwrap();
        assert_eq!(a.max_path, b.max_path);
        assert_eq!(a.min_path, b.min_path);
    }

    #[test]
    fn test_gap_starts_new_segment() {
        let daily = vec![
            day(1, Some(10.0), Some(0.0)),
            day(2, None, Some(1.0)),
            day(3, Some(12.0), Some(2.0)),
        ];
        let spark = Sparkline::build(&daily, 66.0, 46.0, Mode::Max).unwrap();
        assert_eq!(spark.max_path.matches('M').count(), 2);
        assert!(!spark.max_path.contains('L'));
        assert_eq!(spark.min_path.matches('M').count(), 1);
        assert_eq!(spark.min_path.matches('L').count(), 2);
    }

    #[test]
    fn test_month_with_only_maxima_still_draws() {
        let daily = vec![day(1, Some(30.0), None), day(2, Some(32.0), None)];
        let spark = Sparkline::build(&daily, 66.0, 46.0, Mode::Max).unwrap();
        // x: day 2 -> 5; y: [30, 32] -> [43, 3]
        assert_eq!(spark.max_path, "M3,43L5,3");
        assert!(spark.min_path.is_empty());
    }

    #[test]
    fn test_no_usable_values() {
        let daily = vec![day(1, None, None)];
        assert!(Sparkline::build(&daily, 66.0, 46.0, Mode::Max).is_none());
        assert!(Sparkline::build(&[], 66.0, 46.0, Mode::Max).is_none());
    }

    #[test]
    fn test_stroke_colours_follow_mode() {
        let daily = vec![day(1, Some(10.0), Some(0.0))];
        let max = Sparkline::build(&daily, 66.0, 46.0, Mode::Max).unwrap();
        let min = Sparkline::build(&daily, 66.0, 46.0, Mode::Min).unwrap();
        assert_eq!((max.min_stroke, max.max_stroke), ("skyblue", "green"));
        assert_eq!((min.min_stroke, min.max_stroke), ("cyan", "crimson"));
        assert_eq!(max.min_path, min.min_path);
    }
}

use crate::aggregate::Extent;
use crate::scale::SequentialScale;

pub const LEGEND_TITLE: &str = "Legend: Unit - Temperature";
pub const LEGEND_CELLS: usize = 11;
pub const LEGEND_SHAPE_WIDTH: f64 = 30.0;
pub const LEGEND_SHAPE_PADDING: f64 = 2.0;
pub const COOLEST_LABEL: &str = "Coolest Recorded";
pub const HOTTEST_LABEL: &str = "Hottest Recorded";

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub value: f64,
    pub color: String,
    /// Horizontal offset of the swatch from the legend origin.
    pub offset: f64,
    pub label: Option<&'static str>,
}

/// Horizontal strip of colour swatches, coolest on the left.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: &'static str,
    pub swatches: Vec<LegendSwatch>,
}

impl Legend {
    pub fn new(scale: &SequentialScale, extent: Extent, cells: usize) -> Self {
        let span = extent.max - extent.min;
        let swatches = (0..cells)
            .map(|i| {
                let t = if cells > 1 {
                    i as f64 / (cells - 1) as f64
                } else {
                    0.0
                };
                let value = extent.min + span * t;
                let label = if i == 0 {
                    Some(COOLEST_LABEL)
                } else if i + 1 == cells {
                    Some(HOTTEST_LABEL)
                } else {
                    None
                };
                LegendSwatch {
                    value,
                    color: scale.color(value).to_hex(),
                    offset: i as f64 * (LEGEND_SHAPE_WIDTH + LEGEND_SHAPE_PADDING),
                    label,
                }
            })
            .collect();
        Legend {
            title: LEGEND_TITLE,
            swatches,
        }
    }

    /// Total width of the swatch strip.
    pub fn width(&self) -> f64 {
        self.swatches
            .last()
            .map(|s| s.offset + LEGEND_SHAPE_WIDTH)
            .unwrap_or(0.0)
    }
}

use crate::aggregate::Extent;
use crate::color::{ColorScheme, Rgb};

/// Evenly spaced bands over a pixel range, one per domain value.
///
/// Inner and outer padding are the same fraction of the step and the bands
/// are centred within the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Leading edge of the band for `value`, `None` outside the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|v| v == value)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Centre of the band for `value`.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

}

/// Affine map from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// Maps a temperature onto a colour scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    scheme: ColorScheme,
    domain: (f64, f64),
}

impl SequentialScale {
    pub fn new(scheme: ColorScheme, domain: (f64, f64)) -> Self {
        Self { scheme, domain }
    }

    /// Scale over an observed extent, oriented so warm colours mean warm
    /// temperatures.
    pub fn for_extent(scheme: ColorScheme, extent: Extent) -> Self {
        let domain = if scheme.warm_at_start() {
            (extent.max, extent.min)
        } else {
            (extent.min, extent.max)
        };
        Self::new(scheme, domain)
    }

    pub fn color(&self, value: f64) -> Rgb {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        self.scheme.interpolate(t)
    }
}

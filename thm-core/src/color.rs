//! Sequential colour schemes sampled with a uniform B-spline through the
//! ColorBrewer stops, so neighbouring temperatures blend smoothly.

/// An sRGB colour with unclamped float channels (0-255 when valid).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as f64,
            g: ((hex >> 8) & 0xff) as f64,
            b: (hex & 0xff) as f64,
        }
    }

    /// `#rrggbb`, channels rounded and clamped.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

const ORANGES: [u32; 9] = [
    0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704,
];

const SPECTRAL: [u32; 11] = [
    0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5,
    0x3288bd, 0x5e4fa2,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Light to dark orange.
    Oranges,
    /// Diverging red, yellow, blue.
    Spectral,
}

impl ColorScheme {
    fn stops(&self) -> &'static [u32] {
        match self {
            ColorScheme::Oranges => &ORANGES,
            ColorScheme::Spectral => &SPECTRAL,
        }
    }

    /// Whether the warm end of the scheme sits at `t = 0`.
    ///
    /// Spectral starts at red, so its scale domain runs from the highest to
    /// the lowest temperature.
    pub fn warm_at_start(&self) -> bool {
        matches!(self, ColorScheme::Spectral)
    }

    /// Sample the scheme at `t`, clamped to [0, 1].
    pub fn interpolate(&self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t };
        Rgb {
            r: basis_spline(stops, t, |hex| Rgb::from_hex(hex).r),
            g: basis_spline(stops, t, |hex| Rgb::from_hex(hex).g),
            b: basis_spline(stops, t, |hex| Rgb::from_hex(hex).b),
        }
    }
}

fn basis_spline(stops: &[u32], t: f64, channel: impl Fn(u32) -> f64) -> f64 {
    let n = stops.len() - 1;
    let (i, t) = if t <= 0.0 {
        (0, 0.0)
    } else if t >= 1.0 {
        (n - 1, 1.0)
    } else {
        ((t * n as f64).floor() as usize, t)
    };
    let v1 = channel(stops[i]);
    let v2 = channel(stops[i + 1]);
    let v0 = if i > 0 { channel(stops[i - 1]) } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { channel(stops[i + 2]) } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

//! Positional and color scales.

use crate::color::Rgb;

/// Continuous numeric domain → continuous range.
///
/// A degenerate domain (min == max, as happens for a single-point line
/// chart) maps every value to the range start instead of dividing by a
/// zero span.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d1 == d0 {
            return self.range.0;
        }
        let t = (value - d0) / (d1 - d0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Roughly `count` round-valued ticks covering the domain, following
    /// the usual 1/2/5 step progression.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d1 == d0 || count == 0 {
            return vec![d0];
        }
        let span = d1 - d0;
        let raw_step = span / count as f64;
        let magnitude = 10f64.powf(raw_step.abs().log10().floor());
        let residual = raw_step / magnitude;
        let step = magnitude
            * if residual >= 50f64.sqrt() {
                10.0
            } else if residual >= 10f64.sqrt() {
                5.0
            } else if residual >= 2f64.sqrt() {
                2.0
            } else {
                1.0
            };
        let mut ticks = Vec::new();
        let mut v = (d0 / step).ceil() * step;
        while v <= d1 + step * 1e-9 {
            ticks.push(v);
            v += step;
        }
        ticks
    }
}

/// Discrete categories → evenly spaced positional slots.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        BandScale {
            domain,
            range,
            padding,
        }
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let width = self.range.1 - self.range.0;
        if n == 0.0 {
            return width;
        }
        width / (n + self.padding)
    }

    /// Left edge of a category's slot, `None` for unknown categories.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.domain.iter().position(|d| d == key)?;
        let step = self.step();
        Some(self.range.0 + step * self.padding + step * i as f64)
    }

    /// Slot width after padding.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Numeric domain → perceptual color ramp, clamped at the endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialScale {
    domain: (f64, f64),
    interpolator: fn(f64) -> Rgb,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: fn(f64) -> Rgb) -> Self {
        SequentialScale {
            domain,
            interpolator,
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 {
            0.0
        } else {
            (value - d0) / (d1 - d0)
        };
        (self.interpolator)(t)
    }
}

/// First-seen categories → a fixed palette, wrapping past the end.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: Vec<Rgb>,
}

impl OrdinalScale {
    pub fn new(domain: Vec<String>, palette: &[Rgb]) -> Self {
        OrdinalScale {
            domain,
            palette: palette.to_vec(),
        }
    }

    pub fn color(&self, key: &str) -> Rgb {
        let i = self
            .domain
            .iter()
            .position(|d| d == key)
            .unwrap_or_default();
        self.palette[i % self.palette.len()]
    }
}

//! Mercator projection sized to the small per-metric map canvases.

use std::f64::consts::PI;
use std::fmt::Write;

use ayd_model::Ring;

/// Mercator latitude cutoff; beyond this the projection diverges.
const LAT_LIMIT_DEG: f64 = 85.05113;

/// A spherical Mercator projection fitted to a square canvas.
///
/// One instance is shared by all four metric maps so their geometry
/// lines up exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    scale: f64,
    translate: (f64, f64),
}

impl Mercator {
    /// Fit the world to a `size`×`size` canvas, matching the dashboard's
    /// fixed framing: scale `size / 2.5 / π`, center nudged so the
    /// rendered bounds stay inside the canvas.
    pub fn fitted(size: f64) -> Self {
        Mercator {
            scale: size / 2.5 / PI,
            translate: (size / 2.5, size / 1.9),
        }
    }

    /// Project a lon/lat degree pair to canvas coordinates (y down).
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lambda = lon_deg.to_radians();
        let phi = lat_deg.clamp(-LAT_LIMIT_DEG, LAT_LIMIT_DEG).to_radians();
        let y = (PI / 4.0 + phi / 2.0).tan().ln();
        (
            self.translate.0 + self.scale * lambda,
            self.translate.1 - self.scale * y,
        )
    }

    /// SVG path data for a feature's rings, each ring closed with `Z`.
    pub fn path(&self, rings: &[Ring]) -> String {
        let mut d = String::new();
        for ring in rings {
            for (i, (lon, lat)) in ring.iter().enumerate() {
                let (x, y) = self.project(*lon, *lat);
                let command = if i == 0 { 'M' } else { 'L' };
                let _ = write!(d, "{command}{x:.2},{y:.2}");
            }
            if !ring.is_empty() {
                d.push('Z');
            }
        }
        d
    }
}

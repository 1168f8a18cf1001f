//! Color ramps and palettes.
//!
//! Sequential ramps are piecewise-linear interpolations over the 9-class
//! ColorBrewer control points, one ramp per map metric plus the two
//! heatmap ramps. Ordinal palettes cover the line series (category10)
//! and pie slices (pastel1).

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fill for boundary features with no data. Never interpolated.
    pub const NEUTRAL: Rgb = Rgb::new(200, 200, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// CSS serialization used in SVG attributes.
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Darken by `k` steps of the standard 0.7 channel factor.
    pub fn darker(&self, k: f64) -> Rgb {
        let f = 0.7f64.powf(k);
        Rgb::new(
            (self.r as f64 * f).round() as u8,
            (self.g as f64 * f).round() as u8,
            (self.b as f64 * f).round() as u8,
        )
    }
}

/// Interpolate over evenly spaced control points, `t` clamped to [0, 1].
fn ramp(stops: &[(u8, u8, u8)], t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (stops.len() - 1) as f64;
    let x = t * segments;
    let i = (x.floor() as usize).min(stops.len() - 2);
    let f = x - i as f64;
    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];
    Rgb::new(
        (r0 as f64 + f * (r1 as f64 - r0 as f64)).round() as u8,
        (g0 as f64 + f * (g1 as f64 - g0 as f64)).round() as u8,
        (b0 as f64 + f * (b1 as f64 - b0 as f64)).round() as u8,
    )
}

/// Yield map ramp.
pub fn purples(t: f64) -> Rgb {
    const STOPS: [(u8, u8, u8); 9] = [
        (252, 251, 253),
        (239, 237, 245),
        (218, 218, 235),
        (188, 189, 220),
        (158, 154, 200),
        (128, 125, 186),
        (106, 81, 163),
        (84, 39, 143),
        (63, 0, 125),
    ];
    ramp(&STOPS, t)
}

/// Rainfall map ramp.
pub fn blues(t: f64) -> Rgb {
    const STOPS: [(u8, u8, u8); 9] = [
        (247, 251, 255),
        (222, 235, 247),
        (198, 219, 239),
        (158, 202, 225),
        (107, 174, 214),
        (66, 146, 198),
        (33, 113, 181),
        (8, 81, 156),
        (8, 48, 107),
    ];
    ramp(&STOPS, t)
}

/// Pesticides map ramp.
pub fn greens(t: f64) -> Rgb {
    const STOPS: [(u8, u8, u8); 9] = [
        (247, 252, 245),
        (229, 245, 224),
        (199, 233, 192),
        (161, 217, 155),
        (116, 196, 118),
        (65, 171, 93),
        (35, 139, 69),
        (0, 109, 44),
        (0, 68, 27),
    ];
    ramp(&STOPS, t)
}

/// Temperature map ramp.
pub fn reds(t: f64) -> Rgb {
    const STOPS: [(u8, u8, u8); 9] = [
        (255, 245, 240),
        (254, 224, 210),
        (252, 187, 161),
        (252, 146, 114),
        (251, 106, 74),
        (239, 59, 44),
        (203, 24, 29),
        (165, 15, 21),
        (103, 0, 13),
    ];
    ramp(&STOPS, t)
}

/// Heatmap ramp.
pub fn yl_gn_bu(t: f64) -> Rgb {
    const STOPS: [(u8, u8, u8); 9] = [
        (255, 255, 217),
        (237, 248, 177),
        (199, 233, 180),
        (127, 205, 187),
        (65, 182, 196),
        (29, 145, 192),
        (34, 94, 168),
        (37, 52, 148),
        (8, 29, 88),
    ];
    ramp(&STOPS, t)
}

/// Heatmap highlight ramp for the selected country.
pub fn rd_pu(t: f64) -> Rgb {
    const STOPS: [(u8, u8, u8); 9] = [
        (255, 247, 243),
        (253, 224, 221),
        (252, 197, 192),
        (250, 159, 181),
        (247, 104, 161),
        (221, 52, 151),
        (174, 1, 126),
        (122, 1, 119),
        (73, 0, 106),
    ];
    ramp(&STOPS, t)
}

/// Line series palette.
pub const CATEGORY10: [Rgb; 10] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
];

/// Pie slice palette.
pub const PASTEL1: [Rgb; 9] = [
    Rgb::new(0xfb, 0xb4, 0xae),
    Rgb::new(0xb3, 0xcd, 0xe3),
    Rgb::new(0xcc, 0xeb, 0xc5),
    Rgb::new(0xde, 0xcb, 0xe4),
    Rgb::new(0xfe, 0xd9, 0xa6),
    Rgb::new(0xff, 0xff, 0xcc),
    Rgb::new(0xe5, 0xd8, 0xbd),
    Rgb::new(0xfd, 0xda, 0xec),
    Rgb::new(0xf2, 0xf2, 0xf2),
];

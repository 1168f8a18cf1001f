//! The five renderers: choropleth maps, pie, line and heatmap.
//!
//! Each is a pure function of (view model, selection, scene) that clears
//! the scene and redraws it from scratch. Calling one twice with the same
//! inputs leaves the scene identical to a single call.

pub mod choropleth;
pub mod heatmap;
pub mod line;
pub mod pie;

pub use choropleth::{render_choropleth, MapSpec, MAP_SPECS};
pub use heatmap::render_heatmap;
pub use line::render_line;
pub use pie::render_pie;

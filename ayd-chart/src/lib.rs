//! Chart rendering for the yield dashboard.
//!
//! Renderers are pure functions from a view model plus scales to a
//! [`Scene`]: a recorded list of typed draw calls. Tests assert on the
//! recorded shapes; [`Scene::to_svg`] serializes a scene for viewing.
//! Every renderer clears its scene before drawing, so repeated calls with
//! the same inputs produce identical scenes and never accumulate shapes.

pub mod color;
pub mod dashboard;
pub mod projection;
pub mod render;
pub mod scale;
pub mod scene;
mod svg;

pub use color::Rgb;
pub use dashboard::{render_dashboard, Dashboard, Panel, MAP_SIZE};
pub use projection::Mercator;
pub use scale::{BandScale, LinearScale, OrdinalScale, SequentialScale};
pub use scene::{Element, Scene, Shape, TextAnchor};

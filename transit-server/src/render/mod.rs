//! SVG map of the bus network.

mod map;
mod projector;
mod settings;
pub mod svg;

pub use map::{MapRenderer, render_map};
pub use projector::SphereProjector;
pub use settings::RenderSettings;

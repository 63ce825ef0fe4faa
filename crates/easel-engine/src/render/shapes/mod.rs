//! Shape renderers.

mod common;

pub mod geometry;
pub mod text;

pub use geometry::ShapeRenderer;
pub use text::TextRenderer;

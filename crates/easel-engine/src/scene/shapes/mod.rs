mod arc;
mod ellipse;
mod line;
mod rect;
mod text;

pub use arc::{ArcCmd, ArcStyle};
pub use ellipse::EllipseCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// Outline drawn centred on a shape's path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.color.is_finite()
    }

    /// A stroke that would leave no pixels behind.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.width <= 0.0 || self.color.a <= 0.0
    }
}

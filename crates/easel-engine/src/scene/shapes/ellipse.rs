use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Ellipse inscribed in `bounds`. A square `bounds` gives a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub bounds: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    #[inline]
    pub fn push_ellipse(
        &mut self,
        z: ZIndex,
        bounds: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd { bounds, fill, stroke }));
    }
}

use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    /// Records a rectangle with optional interior and outline.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, fill, stroke }));
    }

    /// Records a filled rectangle without an outline.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Some(color), None);
    }
}

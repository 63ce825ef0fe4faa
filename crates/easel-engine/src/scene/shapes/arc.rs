use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// How the open ends of an arc are treated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ArcStyle {
    /// Wedge closed through the ellipse center.
    #[default]
    PieSlice,
    /// Closed by a straight segment between the two arc ends.
    Chord,
    /// Curve only. Never filled.
    Arc,
}

/// Section of the ellipse inscribed in `bounds`.
///
/// `start_deg` and `extent_deg` are measured counter-clockwise from 3 o'clock
/// as seen on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub bounds: Rect,
    pub start_deg: f32,
    pub extent_deg: f32,
    pub style: ArcStyle,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    /// Records an arc, chord or pie slice.
    #[inline]
    pub fn push_arc(&mut self, z: ZIndex, cmd: ArcCmd) {
        self.push(z, DrawCmd::Arc(cmd));
    }
}

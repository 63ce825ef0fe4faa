use super::shapes::{ArcCmd, EllipseCmd, LineCmd, RectCmd, Stroke, TextCmd};
use crate::paint::Color;

/// Renderer-agnostic draw command stream.
///
/// Every variant except `Text` is tessellated by `render::tessellate`;
/// text goes through the glyph atlas renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Rect(RectCmd),
    Ellipse(EllipseCmd),
    Arc(ArcCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, DrawCmd::Text(_))
    }

    /// `false` if any coordinate, angle, width or color channel is NaN or
    /// infinite.
    pub fn is_finite(&self) -> bool {
        fn paint_ok(fill: Option<Color>, stroke: Option<Stroke>) -> bool {
            fill.is_none_or(Color::is_finite) && stroke.is_none_or(|s| s.is_finite())
        }

        match self {
            DrawCmd::Line(l) => l.from.is_finite() && l.to.is_finite() && l.stroke.is_finite(),
            DrawCmd::Rect(r) => r.rect.is_finite() && paint_ok(r.fill, r.stroke),
            DrawCmd::Ellipse(e) => e.bounds.is_finite() && paint_ok(e.fill, e.stroke),
            DrawCmd::Arc(a) => {
                a.bounds.is_finite()
                    && a.start_deg.is_finite()
                    && a.extent_deg.is_finite()
                    && paint_ok(a.fill, a.stroke)
            }
            DrawCmd::Text(t) => {
                t.origin.is_finite()
                    && t.size.is_finite()
                    && t.color.is_finite()
                    && t.max_width.is_none_or(f32::is_finite)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::scene::ArcStyle;

    fn line(to: Vec2, width: f32) -> DrawCmd {
        DrawCmd::Line(LineCmd {
            from: Vec2::zero(),
            to,
            stroke: Stroke::new(width, Color::black()),
        })
    }

    #[test]
    fn finite_commands_pass() {
        assert!(line(Vec2::new(10.0, 10.0), 1.0).is_finite());
        let rect = DrawCmd::Rect(RectCmd {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: Some(Color::white()),
            stroke: None,
        });
        assert!(rect.is_finite());
    }

    #[test]
    fn nan_or_infinite_fields_are_caught() {
        assert!(!line(Vec2::new(f32::NAN, 10.0), 1.0).is_finite());
        assert!(!line(Vec2::new(10.0, 10.0), f32::INFINITY).is_finite());

        let arc = |start: f32, extent: f32| {
            DrawCmd::Arc(ArcCmd {
                bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
                start_deg: start,
                extent_deg: extent,
                style: ArcStyle::PieSlice,
                fill: None,
                stroke: None,
            })
        };
        assert!(arc(0.0, 90.0).is_finite());
        assert!(!arc(0.0, f32::NAN).is_finite());
        assert!(!arc(f32::NEG_INFINITY, 90.0).is_finite());

        let ellipse = DrawCmd::Ellipse(EllipseCmd {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: Some(Color { r: f32::NAN, g: 0.0, b: 0.0, a: 1.0 }),
            stroke: None,
        });
        assert!(!ellipse.is_finite());
    }
}

use easel_engine::coords::{Rect, Vec2};
use easel_engine::paint::Color;
use easel_engine::scene::{ArcCmd, DrawList, Stroke, TextCmd, ZIndex};
use easel_engine::text::{FontId, FontSystem};

use crate::items::{ArcOptions, ItemKind, ShapeOptions, TextOptions};

/// Translates canvas items into engine draw commands.
///
/// Canvas coordinates are relative to the canvas' top-left corner; `origin`
/// is where that corner sits in the window.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    font: Option<FontId>,
    origin: Vec2,
    z: ZIndex,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        fonts: &'a FontSystem,
        font: Option<FontId>,
        origin: Vec2,
    ) -> Self {
        Self { draw_list, fonts, font, origin, z: ZIndex::BASE }
    }

    #[inline]
    fn to_window(&self, p: Vec2) -> Vec2 {
        p + self.origin
    }

    fn bbox(&self, p0: Vec2, p1: Vec2) -> Rect {
        Rect::from_points(self.to_window(p0), self.to_window(p1))
    }

    /// Background fill, then a clip to the canvas area for everything after.
    pub(crate) fn begin_canvas(&mut self, size: Vec2, background: Color) {
        let area = Rect::new(self.origin.x, self.origin.y, size.x, size.y);
        self.draw_list.push_solid_rect(self.z, area, background);
        self.draw_list.push_clip(area);
    }

    pub(crate) fn end_canvas(&mut self) {
        self.draw_list.pop_clip();
    }

    pub(crate) fn item(&mut self, kind: &ItemKind) {
        match kind {
            ItemKind::Line { from, to, options } => {
                let stroke = Stroke::new(options.width, options.fill);
                let (from, to) = (self.to_window(*from), self.to_window(*to));
                self.draw_list.push_line(self.z, from, to, stroke);
            }
            ItemKind::Rectangle { p0, p1, options } => {
                let rect = self.bbox(*p0, *p1);
                self.draw_list.push_rect(self.z, rect, options.fill, shape_stroke(options));
            }
            ItemKind::Oval { p0, p1, options } => {
                let bounds = self.bbox(*p0, *p1);
                self.draw_list.push_ellipse(self.z, bounds, options.fill, shape_stroke(options));
            }
            ItemKind::Arc { p0, p1, options } => {
                let bounds = self.bbox(*p0, *p1);
                self.draw_list.push_arc(self.z, arc_cmd(bounds, options));
            }
            ItemKind::Text { at, text, options } => self.text(*at, text, options),
        }
    }

    fn text(&mut self, at: Vec2, text: &str, options: &TextOptions) {
        let Some(font) = self.font else {
            log::warn!("no font loaded; skipping text item \"{text}\"");
            return;
        };

        let size = self.fonts.measure_text(text, font, options.font_size, options.width);
        let origin = self.to_window(at) + options.anchor.offset(size);

        self.draw_list.push_text(
            self.z,
            TextCmd {
                text: text.to_string(),
                font,
                size: options.font_size,
                color: options.fill,
                origin,
                max_width: options.width,
            },
        );
    }
}

fn shape_stroke(options: &ShapeOptions) -> Option<Stroke> {
    options.outline.map(|c| Stroke::new(options.width, c))
}

fn arc_cmd(bounds: Rect, options: &ArcOptions) -> ArcCmd {
    ArcCmd {
        bounds,
        start_deg: options.start,
        extent_deg: options.extent,
        style: options.style,
        fill: options.fill,
        stroke: options.outline.map(|c| Stroke::new(options.width, c)),
    }
}

use easel_engine::coords::Vec2;
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;
use easel_engine::text::{FontId, FontSystem};

use crate::items::{ArcOptions, Item, ItemId, ItemKind, LineOptions, ShapeOptions, TextOptions};
use crate::painter::Painter;

/// A fixed-size drawing surface holding items in creation order.
///
/// Items are recorded once and painted into a fresh [`DrawList`] every time
/// the window is redrawn; nothing is mutated after creation.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    background: Color,
    items: Vec<Item>,
    next_id: ItemId,
}

impl Canvas {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            items: Vec::new(),
            next_id: ItemId::FIRST,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    // ── item creation ─────────────────────────────────────────────────────

    /// Straight line from `(x1, y1)` to `(x2, y2)`.
    pub fn create_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, options: LineOptions) -> ItemId {
        self.add(ItemKind::Line {
            from: Vec2::new(x1, y1),
            to: Vec2::new(x2, y2),
            options,
        })
    }

    /// Rectangle spanned by two opposite corners.
    pub fn create_rectangle(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        options: ShapeOptions,
    ) -> ItemId {
        self.add(ItemKind::Rectangle {
            p0: Vec2::new(x1, y1),
            p1: Vec2::new(x2, y2),
            options,
        })
    }

    /// Ellipse inscribed in the given bounding box.
    pub fn create_oval(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, options: ShapeOptions) -> ItemId {
        self.add(ItemKind::Oval {
            p0: Vec2::new(x1, y1),
            p1: Vec2::new(x2, y2),
            options,
        })
    }

    /// Arc, chord or pie slice of the ellipse inscribed in the bounding box.
    pub fn create_arc(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, options: ArcOptions) -> ItemId {
        self.add(ItemKind::Arc {
            p0: Vec2::new(x1, y1),
            p1: Vec2::new(x2, y2),
            options,
        })
    }

    /// Text positioned by `options.anchor` relative to `(x, y)`.
    pub fn create_text(&mut self, x: f32, y: f32, text: impl Into<String>, options: TextOptions) -> ItemId {
        self.add(ItemKind::Text {
            at: Vec2::new(x, y),
            text: text.into(),
            options,
        })
    }

    fn add(&mut self, kind: ItemKind) -> ItemId {
        let id = self.next_id;
        self.next_id = id.next();
        log::trace!("canvas item {} ({})", id.0, kind.type_name());
        self.items.push(Item { id, kind });
        id
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Ids are dense and never reused, so the lookup is a direct index.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.items.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Records the background and every item into `draw_list`, clipped to the
    /// canvas area placed at `origin`.
    ///
    /// Text items need `font`; without one they are skipped with a warning.
    pub fn paint(
        &self,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
        font: Option<FontId>,
        origin: Vec2,
    ) {
        let mut painter = Painter::new(draw_list, fonts, font, origin);
        painter.begin_canvas(self.size(), self.background);
        for item in &self.items {
            painter.item(&item.kind);
        }
        painter.end_canvas();
    }
}

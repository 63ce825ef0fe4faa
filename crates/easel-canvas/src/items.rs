use easel_engine::coords::Vec2;
use easel_engine::paint::Color;
use easel_engine::scene::ArcStyle;

// ── ids ───────────────────────────────────────────────────────────────────

/// Canvas item handle. The first item created on a canvas gets id 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const FIRST: ItemId = ItemId(1);

    #[inline]
    pub fn next(self) -> ItemId {
        ItemId(self.0 + 1)
    }
}

// ── anchor ────────────────────────────────────────────────────────────────

/// Which point of a text block sits on the item's coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Anchor {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    #[default]
    Center,
}

impl Anchor {
    /// Offset from the anchor point to the top-left of a block of `size`.
    pub fn offset(self, size: Vec2) -> Vec2 {
        let (w, h) = (size.x, size.y);
        let (dx, dy) = match self {
            Anchor::NW     => (0.0, 0.0),
            Anchor::N      => (-w * 0.5, 0.0),
            Anchor::NE     => (-w, 0.0),
            Anchor::E      => (-w, -h * 0.5),
            Anchor::SE     => (-w, -h),
            Anchor::S      => (-w * 0.5, -h),
            Anchor::SW     => (0.0, -h),
            Anchor::W      => (0.0, -h * 0.5),
            Anchor::Center => (-w * 0.5, -h * 0.5),
        };
        Vec2::new(dx, dy)
    }
}

// ── options ───────────────────────────────────────────────────────────────

/// Options for [`Canvas::create_line`](crate::Canvas::create_line).
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    pub width: f32,
    pub fill: Color,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self { width: 1.0, fill: Color::black() }
    }
}

impl LineOptions {
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }
}

/// Options shared by rectangles and ovals.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOptions {
    pub width: f32,
    /// `None` draws no outline.
    pub outline: Option<Color>,
    /// `None` leaves the interior empty.
    pub fill: Option<Color>,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self { width: 1.0, outline: Some(Color::black()), fill: None }
    }
}

impl ShapeOptions {
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    pub fn no_outline(mut self) -> Self {
        self.outline = None;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

/// Options for [`Canvas::create_arc`](crate::Canvas::create_arc).
///
/// `start` and `extent` are degrees counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcOptions {
    pub start: f32,
    pub extent: f32,
    pub style: ArcStyle,
    pub width: f32,
    pub outline: Option<Color>,
    /// Ignored for [`ArcStyle::Arc`].
    pub fill: Option<Color>,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            extent: 90.0,
            style: ArcStyle::PieSlice,
            width: 1.0,
            outline: Some(Color::black()),
            fill: None,
        }
    }
}

impl ArcOptions {
    pub fn start(mut self, deg: f32) -> Self {
        self.start = deg;
        self
    }

    pub fn extent(mut self, deg: f32) -> Self {
        self.extent = deg;
        self
    }

    pub fn style(mut self, style: ArcStyle) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

/// Options for [`Canvas::create_text`](crate::Canvas::create_text).
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub fill: Color,
    pub anchor: Anchor,
    /// Logical pixels.
    pub font_size: f32,
    /// Wrap width in logical pixels. `None` only breaks at newlines.
    pub width: Option<f32>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            fill: Color::black(),
            anchor: Anchor::Center,
            font_size: 13.0,
            width: None,
        }
    }
}

impl TextOptions {
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

// ── items ─────────────────────────────────────────────────────────────────

/// What an item draws, with the coordinates exactly as they were given.
///
/// Bounding boxes keep both corners in call order; they are normalized only
/// when painted.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Line      { from: Vec2, to: Vec2, options: LineOptions },
    Rectangle { p0: Vec2, p1: Vec2, options: ShapeOptions },
    Oval      { p0: Vec2, p1: Vec2, options: ShapeOptions },
    Arc       { p0: Vec2, p1: Vec2, options: ArcOptions },
    Text      { at: Vec2, text: String, options: TextOptions },
}

impl ItemKind {
    /// Tk item type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemKind::Line { .. }      => "line",
            ItemKind::Rectangle { .. } => "rectangle",
            ItemKind::Oval { .. }      => "oval",
            ItemKind::Arc { .. }       => "arc",
            ItemKind::Text { .. }      => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(100.0, 20.0);

    // ── anchors ───────────────────────────────────────────────────────────

    #[test]
    fn center_anchor_centers_block() {
        assert_eq!(Anchor::Center.offset(SIZE), Vec2::new(-50.0, -10.0));
    }

    #[test]
    fn corner_anchors() {
        assert_eq!(Anchor::NW.offset(SIZE), Vec2::new(0.0, 0.0));
        assert_eq!(Anchor::NE.offset(SIZE), Vec2::new(-100.0, 0.0));
        assert_eq!(Anchor::SE.offset(SIZE), Vec2::new(-100.0, -20.0));
        assert_eq!(Anchor::SW.offset(SIZE), Vec2::new(0.0, -20.0));
    }

    #[test]
    fn edge_anchors() {
        assert_eq!(Anchor::N.offset(SIZE), Vec2::new(-50.0, 0.0));
        assert_eq!(Anchor::E.offset(SIZE), Vec2::new(-100.0, -10.0));
        assert_eq!(Anchor::S.offset(SIZE), Vec2::new(-50.0, -20.0));
        assert_eq!(Anchor::W.offset(SIZE), Vec2::new(0.0, -10.0));
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn line_defaults() {
        let o = LineOptions::default();
        assert_eq!(o.width, 1.0);
        assert_eq!(o.fill, Color::black());
    }

    #[test]
    fn shape_defaults_outline_black_no_fill() {
        let o = ShapeOptions::default();
        assert_eq!(o.width, 1.0);
        assert_eq!(o.outline, Some(Color::black()));
        assert_eq!(o.fill, None);
    }

    #[test]
    fn arc_defaults_quarter_pieslice() {
        let o = ArcOptions::default();
        assert_eq!((o.start, o.extent), (0.0, 90.0));
        assert_eq!(o.style, ArcStyle::PieSlice);
        assert_eq!(o.fill, None);
    }

    #[test]
    fn text_defaults() {
        let o = TextOptions::default();
        assert_eq!(o.anchor, Anchor::Center);
        assert_eq!(o.font_size, 13.0);
        assert_eq!(o.width, None);
    }

    #[test]
    fn builders_override_single_fields() {
        let o = ShapeOptions::default().width(2.0).no_outline();
        assert_eq!(o.width, 2.0);
        assert_eq!(o.outline, None);
        assert_eq!(o.fill, None);
    }

    #[test]
    fn ids_count_up_from_one() {
        assert_eq!(ItemId::FIRST, ItemId(1));
        assert_eq!(ItemId::FIRST.next(), ItemId(2));
    }
}

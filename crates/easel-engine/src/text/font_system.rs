use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the fonts used by text items.
///
/// Fonts are immutable after loading. The system is handed to the text
/// renderer every frame so glyphs can be rasterized on first use.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Returns the `(width, height)` of the laid-out text block in logical pixels.
    ///
    /// Width is the pen advance after the last glyph, not the bitmap edge, so
    /// anchoring by this size lines up with where the renderer places glyphs.
    /// An unknown font measures as an empty line of `size * 1.2`.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        let line_height = size * 1.2;
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, line_height);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, line_height);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = layout.height().max(line_height);
        Vec2::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_bytes() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.is_empty());
    }

    const DEJAVU_SANS: &[u8] = include_bytes!("../../tests/fixtures/DejaVuSans.ttf");

    fn dejavu() -> (FontSystem, FontId) {
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(DEJAVU_SANS).unwrap();
        (fonts, id)
    }

    #[test]
    fn loads_truetype_font() {
        let (fonts, id) = dejavu();
        assert_eq!(fonts.len(), 1);
        assert!(fonts.get(id).is_some_and(|f| f.glyph_count() > 0));
    }

    #[test]
    fn width_grows_with_text_length() {
        let (fonts, id) = dejavu();
        let short = fonts.measure_text("Basic", id, 13.0, None);
        let long = fonts.measure_text("Basic Graphics", id, 13.0, None);
        assert!(short.x > 0.0);
        assert!(long.x > short.x);
        assert!(long.x > 90.0 && long.x < 115.0, "unexpected width {}", long.x);
        assert!(long.y >= 13.0 * 1.2);
    }

    #[test]
    fn width_scales_with_font_size() {
        let (fonts, id) = dejavu();
        let small = fonts.measure_text("Basic Graphics", id, 13.0, None);
        let large = fonts.measure_text("Basic Graphics", id, 26.0, None);
        let ratio = large.x / small.x;
        assert!((ratio - 2.0).abs() < 0.2, "ratio {ratio}");
    }

    #[test]
    fn empty_text_measures_as_empty_line() {
        let (fonts, id) = dejavu();
        assert_eq!(fonts.measure_text("", id, 13.0, None), Vec2::new(0.0, 13.0 * 1.2));
    }

    #[test]
    fn max_width_wraps_onto_more_lines() {
        let (fonts, id) = dejavu();
        let single = fonts.measure_text("Basic Graphics", id, 13.0, None);
        let wrapped = fonts.measure_text("Basic Graphics", id, 13.0, Some(60.0));
        assert!(wrapped.y > single.y);
        assert!(wrapped.x < single.x);
    }

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure_text("Basic Graphics", FontId(3), 10.0, None), Vec2::new(0.0, 10.0 * 1.2));
    }
}

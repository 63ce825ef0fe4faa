use super::Rect;

/// Drawable area of a window in logical pixels.
///
/// Shaders map logical positions to NDC against this size; scissor rects map
/// it to physical pixels with the window scale factor.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical viewport covering a surface of `width` x `height` physical
    /// pixels. Non-positive or non-finite scales are treated as 1.
    pub fn from_physical(width: u32, height: u32, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self::new(width as f32 / scale, height as f32 / scale)
    }

    /// The whole viewport as a rect at the origin.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Size handed to shaders. Never zero so the NDC divide stays finite.
    #[inline]
    pub fn shader_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }

    /// Size in physical pixels, at least 1x1.
    #[inline]
    pub fn physical(self, scale: f32) -> (u32, u32) {
        (
            (self.width * scale).max(1.0) as u32,
            (self.height * scale).max(1.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_scales() {
        assert_eq!(Viewport::new(450.0, 300.0).physical(1.5), (675, 450));
    }

    #[test]
    fn from_physical_divides_by_scale() {
        let vp = Viewport::from_physical(900, 600, 2.0);
        assert_eq!(vp, Viewport::new(450.0, 300.0));
        assert_eq!(vp.physical(2.0), (900, 600));
    }

    #[test]
    fn from_physical_ignores_bad_scale() {
        assert_eq!(Viewport::from_physical(450, 300, 0.0), Viewport::new(450.0, 300.0));
        assert_eq!(Viewport::from_physical(450, 300, f32::NAN), Viewport::new(450.0, 300.0));
    }

    #[test]
    fn degenerate_viewport_is_clamped() {
        let vp = Viewport::new(0.0, -3.0);
        assert_eq!(vp.physical(2.0), (1, 1));
        assert_eq!(vp.shader_size(), [1.0, 1.0]);
    }

    #[test]
    fn bounds_start_at_origin() {
        assert_eq!(Viewport::new(450.0, 300.0).bounds(), Rect::new(0.0, 0.0, 450.0, 300.0));
    }
}

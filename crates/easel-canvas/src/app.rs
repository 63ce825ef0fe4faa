use anyhow::Result;
use winit::dpi::{LogicalPosition, LogicalSize};

use easel_engine::coords::Vec2;
use easel_engine::core::{App as EngineApp, AppControl, FrameCtx};
use easel_engine::device::{describe_adapter, GpuInit};
use easel_engine::paint::Color;
use easel_engine::render::shapes::{ShapeRenderer, TextRenderer};
use easel_engine::scene::DrawList;
use easel_engine::text::{FontId, FontSystem};
use easel_engine::window::{Runtime, RuntimeConfig};

use crate::canvas::Canvas;
use crate::geometry::{Geometry, GeometryError};

/// Tk's default window background, `#d9d9d9`.
pub fn default_background() -> Color {
    Color::from_srgb_u8(0xd9, 0xd9, 0xd9, 0xff)
}

/// Window size used when neither a geometry nor a canvas is given.
const FALLBACK_SIZE: (u32, u32) = (200, 200);

// ── Application ───────────────────────────────────────────────────────────

/// Top-level application builder: one window holding one canvas.
///
/// ```rust,ignore
/// Application::new()
///     .title("Basic Graphical Primitives")
///     .geometry("450x300")?
///     .font(load_font())
///     .canvas(canvas)
///     .run()?;
/// ```
pub struct Application {
    title:      String,
    geometry:   Option<Geometry>,
    background: Color,
    font:       Option<Vec<u8>>,
    canvas:     Option<Canvas>,
    gpu_init:   GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:      "easel".to_string(),
            geometry:   None,
            background: default_background(),
            font:       None,
            canvas:     None,
            gpu_init:   GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the window geometry from a Tk `WxH[+X+Y]` string.
    pub fn geometry(mut self, spec: &str) -> Result<Self, GeometryError> {
        self.geometry = Some(Geometry::parse(spec)?);
        Ok(self)
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        let position = self.geometry.and_then(|g| g.position);
        self.geometry = Some(Geometry { width, height, position });
        self
    }

    /// Window color visible around the canvas.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Font used by every text item. Without one, text items are not drawn.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.font = Some(data);
        self
    }

    pub fn canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = Some(canvas);
        self
    }

    /// Override adapter and surface preferences.
    pub fn gpu(mut self, gpu_init: GpuInit) -> Self {
        self.gpu_init = gpu_init;
        self
    }

    /// Window configuration derived from the builder.
    ///
    /// Without an explicit geometry the window takes the canvas' size.
    pub fn runtime_config(&self) -> RuntimeConfig {
        let (width, height) = match (self.geometry, &self.canvas) {
            (Some(g), _) => (g.width, g.height),
            (None, Some(c)) => (c.size().x.ceil() as u32, c.size().y.ceil() as u32),
            (None, None) => FALLBACK_SIZE,
        };
        let position = self
            .geometry
            .and_then(|g| g.position)
            .map(|(x, y)| LogicalPosition::new(x as f64, y as f64));

        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(width as f64, height as f64),
            position,
            ..RuntimeConfig::default()
        }
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Opens the window and blocks until it is closed.
    pub fn run(self) -> Result<()> {
        let config = self.runtime_config();
        let gpu_init = self.gpu_init.clone();
        let state = CanvasAppState::new(self);
        Runtime::run(config, gpu_init, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a canvas packed at the top of a window ends up: centered
/// horizontally, flush with the top edge.
pub fn pack_origin(window: Vec2, canvas: Vec2) -> Vec2 {
    Vec2::new(((window.x - canvas.x) * 0.5).max(0.0).floor(), 0.0)
}

// ── CanvasAppState ────────────────────────────────────────────────────────

/// Internal state that implements `easel_engine::core::App`.
///
/// Everything engine-specific (renderers, FrameCtx) lives here.
struct CanvasAppState {
    background: Color,
    canvas:     Option<Canvas>,

    fonts: FontSystem,
    font:  Option<FontId>,

    draw_list:      DrawList,
    shape_renderer: ShapeRenderer,
    text_renderer:  TextRenderer,
}

impl CanvasAppState {
    fn new(app: Application) -> Self {
        let mut fonts = FontSystem::new();
        let font = match &app.font {
            Some(bytes) if !bytes.is_empty() => match fonts.load_font(bytes) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("failed to load font: {e}");
                    None
                }
            },
            _ => {
                log::warn!("no font configured; text items will not be drawn");
                None
            }
        };

        if let Some(canvas) = &app.canvas {
            log::info!(
                "canvas {}x{} with {} items",
                canvas.size().x,
                canvas.size().y,
                canvas.len()
            );
        }

        Self {
            background:     app.background,
            canvas:         app.canvas,
            fonts,
            font,
            draw_list:      DrawList::new(),
            shape_renderer: ShapeRenderer::new(),
            text_renderer:  TextRenderer::new(),
        }
    }
}

impl EngineApp for CanvasAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        if ctx.frame_index == 0 {
            let size = ctx.gpu.size();
            log::info!(
                "first frame {}x{} (scale {}) on {}",
                size.width,
                size.height,
                ctx.window.scale_factor(),
                describe_adapter(&ctx.gpu.adapter_info())
            );
        }

        // ── Paint ─────────────────────────────────────────────────────────
        self.draw_list.clear();
        if let Some(canvas) = &self.canvas {
            let origin = pack_origin(Vec2::new(w, h), canvas.size());
            canvas.paint(&mut self.draw_list, &self.fonts, self.font, origin);
        }

        // ── Render ────────────────────────────────────────────────────────
        let dl  = &mut self.draw_list;
        let fs  = &self.fonts;
        let r_s = &mut self.shape_renderer;
        let r_t = &mut self.text_renderer;

        ctx.render(self.background, |rctx, target| {
            r_s.render(rctx, target, dl);
            r_t.render(rctx, target, dl, fs);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_background_is_tk_gray() {
        assert_eq!(default_background(), Color::parse("#d9d9d9").unwrap());
        assert_eq!(Application::new().background, default_background());
    }

    #[test]
    fn geometry_sets_window_size() {
        let app = Application::new().title("t").geometry("450x300").unwrap();
        let config = app.runtime_config();
        assert_eq!(config.title, "t");
        assert_eq!(config.initial_size, LogicalSize::new(450.0, 300.0));
        assert_eq!(config.position, None);
    }

    #[test]
    fn geometry_position_is_forwarded() {
        let app = Application::new().geometry("10x20+30+40").unwrap();
        assert_eq!(app.runtime_config().position, Some(LogicalPosition::new(30.0, 40.0)));
    }

    #[test]
    fn bad_geometry_is_an_error() {
        assert!(Application::new().geometry("wide").is_err());
    }

    #[test]
    fn size_keeps_geometry_position() {
        let app = Application::new().geometry("10x20+30+40").unwrap().size(450, 300);
        let config = app.runtime_config();
        assert_eq!(config.initial_size, LogicalSize::new(450.0, 300.0));
        assert_eq!(config.position, Some(LogicalPosition::new(30.0, 40.0)));
    }

    #[test]
    fn window_falls_back_to_canvas_size() {
        let app = Application::new().canvas(Canvas::new(320.0, 240.0, Color::white()));
        assert_eq!(app.runtime_config().initial_size, LogicalSize::new(320.0, 240.0));
    }

    #[test]
    fn window_falls_back_to_tk_default() {
        assert_eq!(Application::new().runtime_config().initial_size, LogicalSize::new(200.0, 200.0));
    }

    #[test]
    fn packed_canvas_is_centered_horizontally() {
        assert_eq!(pack_origin(Vec2::new(450.0, 300.0), Vec2::new(450.0, 300.0)), Vec2::zero());
        assert_eq!(pack_origin(Vec2::new(500.0, 400.0), Vec2::new(450.0, 300.0)), Vec2::new(25.0, 0.0));
        assert_eq!(pack_origin(Vec2::new(300.0, 200.0), Vec2::new(450.0, 300.0)), Vec2::zero());
    }
}

//! Easel canvas: Tk-style canvas items on top of `easel-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel_canvas::prelude::*;
//!
//! let mut canvas = Canvas::new(450.0, 300.0, Color::white());
//! canvas.create_line(30.0, 30.0, 130.0, 30.0, LineOptions::default().width(2.0));
//! canvas.create_oval(170.0, 60.0, 250.0, 140.0, ShapeOptions::default().outline(Color::parse("green")?));
//!
//! Application::new()
//!     .title("Shapes")
//!     .geometry("450x300")?
//!     .canvas(canvas)
//!     .run()?;
//! ```
//!
//! Items are immutable once created. Every redraw paints them, in creation
//! order, into the engine's draw stream.

pub mod app;
pub mod canvas;
pub mod geometry;
pub mod items;
mod painter;

// Top-level re-exports for the common entry points.
pub use app::Application;
pub use canvas::Canvas;

/// Everything needed to build a canvas and run it.
pub mod prelude {
    pub use crate::app::{default_background, Application};
    pub use crate::canvas::Canvas;
    pub use crate::geometry::{Geometry, GeometryError};
    pub use crate::items::{
        Anchor, ArcOptions, Item, ItemId, ItemKind, LineOptions, ShapeOptions, TextOptions,
    };

    // Re-export the engine primitives every canvas user needs.
    pub use easel_engine::coords::{Rect, Vec2};
    pub use easel_engine::paint::{Color, ColorParseError};
    pub use easel_engine::scene::ArcStyle;
}

//! Color model shared between the canvas layer and renderers.
//!
//! Colors are stored linear and premultiplied. Toolkit-style color specs
//! (`"blue"`, `"#ff8800"`) are parsed here so callers never touch the
//! transfer function.

mod color;
mod named;

pub use color::{Color, ColorParseError};

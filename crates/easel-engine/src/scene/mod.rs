//! The per-frame draw stream.
//!
//! The canvas layer records commands here; renderers read them back in paint
//! order. Shape payloads and their `push_*` helpers live in `scene::shapes`.

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
pub use shapes::{ArcCmd, ArcStyle, EllipseCmd, LineCmd, RectCmd, Stroke, TextCmd};

//! The seam between the platform loop and whatever draws into the window.

mod ctx;

use winit::event::WindowEvent;
use winit::window::WindowId;

pub use ctx::{FrameCtx, WindowCtx};

/// Returned by app callbacks to keep the loop running or stop it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Implemented by the layer that owns the scene.
///
/// The runtime handles window lifecycle and resizing itself; an app only
/// sees events it may want to veto and redraw requests.
pub trait App {
    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called whenever the platform asks for the window to be redrawn.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

//! wgpu setup for a single window: adapter and device selection, surface
//! configuration, frame acquisition and presentation.

mod gpu;
mod init;
mod surface;

pub use gpu::{describe_adapter, Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;

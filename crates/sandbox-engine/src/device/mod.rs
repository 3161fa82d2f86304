//! wgpu device and swapchain for the sandbox window.
//!
//! [`Gpu`] is created once per window, resized with it, and hands out one
//! [`GpuFrame`] per redraw.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;

//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out per frame. Device, queue and surface format are
//! passed explicitly through [`RenderCtx`].

mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{QuadRenderer, QuadVertex, QUAD_INDICES, QUAD_VERTICES};

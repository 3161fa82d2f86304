//! Sandbox engine crate.
//!
//! Window, GPU and frame-loop plumbing for the quad sandbox, plus the
//! line-oriented reader used to load shader source files.

pub mod core;
pub mod device;
pub mod io;
pub mod logging;
pub mod render;
pub mod shader;
pub mod window;

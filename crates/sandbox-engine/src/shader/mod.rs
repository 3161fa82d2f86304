//! Shader source files.
//!
//! Files are read through [`crate::io::LineReader`] and kept as raw lines.
//! Nothing here compiles or links shaders.

mod source;

pub use source::{ShaderSource, SHADER_LINE_CAPACITY};

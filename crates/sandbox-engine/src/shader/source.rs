use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::LineReader;

/// Per-line capacity used when reading shader files (terminator included).
pub const SHADER_LINE_CAPACITY: usize = 256;

/// Raw shader file contents, split into lines.
///
/// The text is not interpreted: no stage splitting, no compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    origin: PathBuf,
    lines: Vec<String>,
}

impl ShaderSource {
    /// Reads a shader file line by line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open shader file {}", path.display()))?;

        Self::load_from(BufReader::new(file), path)
            .with_context(|| format!("failed to read shader file {}", path.display()))
    }

    /// Reads shader text from any stream. `origin` is kept for diagnostics.
    ///
    /// A last line with no trailing newline is kept rather than dropped, so
    /// `text()` always gives back the whole file.
    pub fn load_from<R: Read>(stream: R, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        let mut reader = LineReader::new(stream, SHADER_LINE_CAPACITY);
        let mut lines = Vec::new();

        reader.for_each_line(|line| {
            let line = String::from_utf8_lossy(line).into_owned();
            log::debug!("{}: {line}", origin.display());
            lines.push(line);
        })?;

        log::debug!("loaded {} lines from {}", lines.len(), origin.display());

        Ok(Self { origin, lines })
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines rejoined with `\n` (no trailing newline).
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Prints every line to stdout as `line: <text>`.
    pub fn echo(&self) {
        for line in &self.lines {
            println!("line: {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempdir::TempDir;

    const BASIC: &str = "#shader vertex\n\
                         layout(location = 0) in vec4 position;\n\
                         \n\
                         #shader fragment\n\
                         out vec4 color;\n";

    #[test]
    fn load_from_collects_lines() {
        let src = ShaderSource::load_from(Cursor::new(BASIC), "basic.shader").unwrap();
        assert_eq!(src.lines().len(), 5);
        assert_eq!(src.lines()[0], "#shader vertex");
        assert_eq!(src.lines()[2], "");
        assert_eq!(src.origin(), Path::new("basic.shader"));
    }

    #[test]
    fn text_reconstructs_input_without_final_newline() {
        let src = ShaderSource::load_from(Cursor::new(BASIC), "basic.shader").unwrap();
        assert_eq!(src.text(), BASIC.trim_end_matches('\n'));
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let src = ShaderSource::load_from(Cursor::new("a\nb"), "x").unwrap();
        assert_eq!(src.lines(), &["a".to_string(), "b".to_string()]);
        assert_eq!(src.text(), "a\nb");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let src = ShaderSource::load_from(Cursor::new(&b"ok\n\xffbad\n"[..]), "x").unwrap();
        assert_eq!(src.lines()[1], "\u{fffd}bad");
    }

    #[test]
    fn overlong_line_is_an_error() {
        let long = "x".repeat(SHADER_LINE_CAPACITY);
        let err = ShaderSource::load_from(Cursor::new(long), "long.shader").unwrap_err();
        assert!(err.to_string().contains("exceeds buffer capacity"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = TempDir::new("sandbox-shader").unwrap();
        let path = dir.path().join("basic.shader");
        File::create(&path).unwrap().write_all(BASIC.as_bytes()).unwrap();

        let src = ShaderSource::load(&path).unwrap();
        assert_eq!(src.lines().len(), 5);
        assert_eq!(src.origin(), path.as_path());
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = TempDir::new("sandbox-shader").unwrap();
        let path = dir.path().join("missing.shader");
        let err = ShaderSource::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.shader"));
    }
}

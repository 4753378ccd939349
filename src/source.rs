//! @ai:module:intent In-memory line buffer of a source file and its wholesale rewrite
//! @ai:module:layer infrastructure
//! @ai:module:public_api SourceFile
//! @ai:module:depends_on error

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// @ai:intent Lines of one file, each keeping its own terminator
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// @ai:intent Read a file into a line buffer
    /// @ai:pre path exists and is valid UTF-8
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self::from_text(path, &content))
    }

    /// @ai:intent Split text into lines without losing `\n` or `\r\n`
    /// @ai:example ("a\r\nb") -> ["a\r\n", "b"]
    /// @ai:effects pure
    pub fn from_text(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines_mut(&mut self) -> &mut [String] {
        &mut self.lines
    }

    /// @ai:effects pure
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// @ai:intent Overwrite the file with the buffer contents
    /// @ai:effects fs:write
    /// @ai:assumes no concurrent writer; the write is not atomic
    pub fn persist(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_text()).map_err(|e| Error::FileWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

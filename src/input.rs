use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// A UTF-8 text file mapped into memory.
///
/// The bytes are validated once when the file is opened; [`TextFile::as_str`]
/// borrows them without copying.
pub struct TextFile {
    /// `None` for an empty file, which cannot be mapped on every platform.
    map: Option<Mmap>,
}

impl TextFile {
    pub fn as_str(&self) -> &str {
        match &self.map {
            // SAFETY: `read_text` checked these bytes are UTF-8, and the map is
            // read-only. Both hold only while no other process writes to or
            // truncates the file during the map's lifetime.
            Some(map) => unsafe { std::str::from_utf8_unchecked(map) },
            None => "",
        }
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps a whole UTF-8 text file at the given path.
///
/// The file must not be modified or truncated by another process while the
/// returned [`TextFile`] is alive.
pub fn read_text(path: &str) -> Result<TextFile> {
    let file_path = Path::new(path);

    if !file_path.exists() {
        anyhow::bail!("File not found: {}", path);
    }

    if file_path.is_dir() {
        anyhow::bail!("Path is a directory, not a text file: {}", path);
    }

    let file = File::open(file_path).with_context(|| format!("Failed to open file: {}", path))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to read metadata: {}", path))?
        .len();

    if len == 0 {
        return Ok(TextFile { map: None });
    }

    // SAFETY: the mapping is only sound while no other process modifies or
    // truncates the file; callers accept that for the lifetime of `TextFile`.
    let map = unsafe { Mmap::map(&file) }.with_context(|| format!("Failed to map file: {}", path))?;

    std::str::from_utf8(&map)
        .with_context(|| format!("File is not valid UTF-8 text: {}", path))?;

    debug!(path, bytes = len, "mapped input file");
    Ok(TextFile { map: Some(map) })
}

/// Reads one line from `reader`, without its line terminator.
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read a line of input")?;

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

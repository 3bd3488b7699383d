use crate::row::Row;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("row index {at} out of range (buffer has {len} rows)")]
    OutOfRange { at: usize, len: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered store of rows plus the file it came from.
///
/// `dirty` counts mutations since the last load or save.
#[derive(Debug, Default)]
pub struct Buffer {
    rows: Vec<Row>,
    pub file_path: Option<PathBuf>,
    pub dirty: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean buffer from the on-disk byte format
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let rows = bytes
            .split_inclusive(|&b| b == b'\n')
            .map(|line| Row::new(strip_line_ending(line)))
            .collect();
        Self {
            rows,
            file_path: None,
            dirty: 0,
        }
    }

    /// Build a buffer holding `lines` as rows, marked clean
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            rows: lines.into_iter().map(Row::new).collect(),
            file_path: None,
            dirty: 0,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Length of row `at` in raw bytes, 0 for the virtual row past the end
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    pub fn insert_row(&mut self, at: usize, bytes: impl Into<Vec<u8>>) -> Result<(), BufferError> {
        if at > self.rows.len() {
            return Err(BufferError::OutOfRange {
                at,
                len: self.rows.len(),
            });
        }
        self.rows.insert(at, Row::new(bytes));
        self.dirty += 1;
        Ok(())
    }

    /// Insert a copy of an existing row, e.g. one taken from the register
    pub fn insert_row_copy(&mut self, at: usize, row: Row) -> Result<(), BufferError> {
        if at > self.rows.len() {
            return Err(BufferError::OutOfRange {
                at,
                len: self.rows.len(),
            });
        }
        self.rows.insert(at, row);
        self.dirty += 1;
        Ok(())
    }

    /// Remove row `at`, returning it. Out-of-range indices are a no-op.
    pub fn delete_row(&mut self, at: usize) -> Option<Row> {
        if at >= self.rows.len() {
            return None;
        }
        self.dirty += 1;
        Some(self.rows.remove(at))
    }

    pub fn row_insert_char(&mut self, row: usize, at: usize, ch: u8) {
        if let Some(r) = self.rows.get_mut(row) {
            r.insert_byte(at, ch);
            self.dirty += 1;
        }
    }

    pub fn row_delete_char(&mut self, row: usize, at: usize) {
        if let Some(r) = self.rows.get_mut(row)
            && r.delete_byte(at)
        {
            self.dirty += 1;
        }
    }

    pub fn row_append(&mut self, row: usize, bytes: &[u8]) {
        if let Some(r) = self.rows.get_mut(row) {
            r.append(bytes);
            self.dirty += 1;
        }
    }

    /// Truncate row `row` at `at` and return the cut-off tail
    pub fn row_split(&mut self, row: usize, at: usize) -> Vec<u8> {
        match self.rows.get_mut(row) {
            Some(r) => {
                let tail = r.split_off(at);
                self.dirty += 1;
                tail
            }
            None => Vec::new(),
        }
    }

    /// Every row followed by a single `\n`
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let bytes = fs::read(path.as_ref())?;
        let loaded = Self::from_bytes(&bytes);
        self.rows = loaded.rows;
        self.file_path = Some(path.as_ref().to_path_buf());
        self.dirty = 0;
        info!(
            "Loaded {} rows from {}",
            self.rows.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Write the buffer to `path`, returning the number of bytes written.
    ///
    /// The dirty counter is only cleared when the write succeeds.
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, BufferError> {
        let bytes = self.serialize();
        fs::write(path.as_ref(), &bytes)?;
        self.dirty = 0;
        debug!("Wrote {} bytes to {}", bytes.len(), path.as_ref().display());
        Ok(bytes.len())
    }

    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

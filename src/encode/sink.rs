use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::assets::decode::PixelGrid;
use crate::encode::document::{DocumentStats, write_document};
use crate::foundation::error::{PixelError, PixelResult};

/// Buffered output file for one document.
///
/// The file is created (or truncated) by [`DocumentSink::create`] and closed when the sink is
/// dropped, on success and error paths alike. Writes are not atomic: a failure part-way leaves
/// a truncated file behind.
#[derive(Debug)]
pub struct DocumentSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl DocumentSink {
    /// Create the output file at `path`. The parent directory must already exist.
    pub fn create(path: &Path) -> PixelResult<Self> {
        let file = File::create(path).map_err(|e| PixelError::create(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole document for `grid`, then flush.
    pub fn write_grid(mut self, grid: &PixelGrid) -> PixelResult<DocumentStats> {
        write_and_flush(&mut self.writer, &self.path, grid)
    }
}

fn write_and_flush<W: Write + ?Sized>(
    out: &mut W,
    path: &Path,
    grid: &PixelGrid,
) -> PixelResult<DocumentStats> {
    let stats = write_document(&mut *out, grid).map_err(|e| PixelError::write(path, e))?;
    out.flush().map_err(|e| PixelError::write(path, e))?;
    Ok(stats)
}

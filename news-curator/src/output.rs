use crate::types::{ArticleBatch, CuratorError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Sink for the finished batch. Unlike source failures, a write error here
/// is returned to the caller.
pub trait OutputWriter {
    fn write(&self, batch: &ArticleBatch) -> Result<()>;
}

/// Writes the batch as pretty-printed UTF-8 JSON.
pub struct JsonFileWriter {
    path: PathBuf,
}

impl JsonFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for JsonFileWriter {
    fn write(&self, batch: &ArticleBatch) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, batch)?;
        writer.flush()?;

        info!("Wrote {} articles to {}", batch.total_count, self.path.display());
        Ok(())
    }
}

/// Read back a batch written by [`JsonFileWriter`].
pub fn load_batch(path: &Path) -> Result<ArticleBatch> {
    if !path.exists() {
        return Err(CuratorError::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

//! Record file I/O with atomic writes
//!
//! Each entity kind lives in one JSON file holding a versioned list of
//! records. Files are rewritten in full on every save, so a write goes to a
//! sibling temp file first and is renamed over the target only once synced.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::NestEggError;

/// On-disk format version written by this build
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct RecordFile<T> {
    version: u32,
    records: T,
}

/// Load all records from `path`. A missing file is an empty store.
pub fn load_records<R, P>(path: P) -> Result<Vec<R>, NestEggError>
where
    R: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| NestEggError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let file_data: RecordFile<Vec<R>> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| NestEggError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;

    if file_data.version > FORMAT_VERSION {
        return Err(NestEggError::Storage(format!(
            "{} was written by a newer version (format {}, supported {})",
            path.display(),
            file_data.version,
            FORMAT_VERSION
        )));
    }

    Ok(file_data.records)
}

/// Replace the contents of `path` with `records`, atomically
pub fn store_records<R, P>(path: P, records: &[R]) -> Result<(), NestEggError>
where
    R: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            NestEggError::Storage(format!("Failed to create directory {}: {}", parent.display(), e))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| NestEggError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let file_data = RecordFile {
        version: FORMAT_VERSION,
        records,
    };
    serde_json::to_writer_pretty(&mut writer, &file_data)
        .map_err(|e| NestEggError::Storage(format!("Failed to serialize records: {}", e)))?;

    writer
        .flush()
        .map_err(|e| NestEggError::Storage(format!("Failed to flush records: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| NestEggError::Storage(format!("Failed to sync records: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        NestEggError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })
}

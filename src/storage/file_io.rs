//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::ExpenseError;

/// Read a JSON document, returning `None` if the file is missing or blank
///
/// A file holding only whitespace is treated like a missing file. Anything
/// else that fails to parse is `PersistedStateCorrupt`.
pub fn read_json_value<P: AsRef<Path>>(path: P) -> Result<Option<Value>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    // Bytes, so bad encoding surfaces as a parse error rather than an I/O one
    let contents = fs::read(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(&contents).map(Some).map_err(|e| {
        ExpenseError::PersistedStateCorrupt(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)
            .map_err(|e| format!("Failed to serialize data: {}", e))
    })
}

/// Write a file atomically using the provided body writer
pub fn write_atomic<P, F>(path: P, body: F) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), String>,
{
    let path = path.as_ref();
    let fail = ExpenseError::PersistenceWriteFailure;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            fail(format!("Failed to create directory {}: {}", parent.display(), e))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| format!("Failed to create temp file: {}", e))?;

        let mut writer = BufWriter::new(file);
        body(&mut writer)?;

        writer
            .flush()
            .map_err(|e| format!("Failed to flush data: {}", e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| format!("Failed to sync data: {}", e))?;

        fs::rename(&temp_path, path).map_err(|e| format!("Failed to rename temp file: {}", e))
    })();

    if let Err(message) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(fail(format!("{}: {}", path.display(), message)));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

//! Provides utility functions for file system operations critical to the application.
//!
//! This includes validating the map file path, extracting a display name for
//! the map, writing the final report to a file, and initializing the detail
//! log writer. It uses macros from the parent `app` module for verbose
//! logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::{Path, PathBuf};
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln; // These macros write to the log file if the logger is initialized.

/// Validates the given map file path and extracts a display name from it.
///
/// Checks that the path exists and points to a file. The map name is derived
/// from the file stem.
///
/// # Errors
/// Returns `AppError::General` if the path is invalid (not found or not a file).
pub fn validate_map_file_and_get_name(
    map_file_path: &PathBuf,
    quiet_mode: bool,
) -> Result<String, AppError> {
    if !map_file_path.exists() {
        let error_msg = format!("File not found: {}", map_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !map_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", map_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    let map_name = map_file_path
        .file_stem()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            let error_msg = format!(
                "Could not determine map name from file: {}",
                map_file_path.display()
            );
            verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
            AppError::General(error_msg)
        })?;

    Ok(map_name)
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// The whole content is written through a `BufWriter` and explicitly flushed
/// so the caller sees the complete file immediately after a successful call.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Initializes and returns a `BufWriter<File>` for the route detail log.
///
/// The file is truncated on each run so it only holds the details of the
/// current execution. No flush here: the returned writer flushes when its
/// buffer fills or when it is dropped at the end of the run.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened or created.
pub fn init_detail_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}

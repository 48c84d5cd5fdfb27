//! File system helpers for the application: validating the dictionary path
//! and writing the rendered report. Uses the verbose logging macros from the
//! parent `app` module.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `dictionary_path` exists and is a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_dictionary_file(dictionary_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !dictionary_path.exists() {
        let error_msg = format!("File not found: {}", dictionary_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !dictionary_path.is_file() {
        let error_msg = format!("Path is not a file: {}", dictionary_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Writes string content to a file, creating or truncating it.
///
/// The writer is flushed before returning so the caller sees the complete
/// file immediately after a successful call.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_dictionary_file(file.path(), true).is_ok());
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_dictionary_file(&dir.path().join("nope.txt"), true).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(ref msg) if msg.starts_with("File not found")));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_dictionary_file(dir.path(), true).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(ref msg) if msg.starts_with("Path is not a file")));
    }

    #[test]
    fn test_write_content_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_content_to_file(&path, "a much longer first report\n").unwrap();
        write_content_to_file(&path, "short\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
    }
}

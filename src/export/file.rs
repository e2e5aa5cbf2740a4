//! Export target resolution.

use super::types::{ExportError, ExportFormat};
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - Image format whose extension is appended
pub fn generate_filename(template: &str, format: ExportFormat) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format.extension())
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Turns a user-supplied export path into the file to write and its format.
///
/// - An existing directory gets a generated file name from the template
/// - A supported extension (png, jpg, jpeg, bmp) selects the format
/// - Any other or missing extension gets `.png` appended
///
/// The parent directory of an explicit file is not created.
pub fn resolve_target(path: &Path, config: &ExportConfig) -> (PathBuf, ExportFormat) {
    let path = match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    };

    if path.is_dir() {
        let format = ExportFormat::from(config.default_format);
        let target = path.join(generate_filename(&config.filename_template, format));
        return (target, format);
    }

    match ExportFormat::from_path(&path) {
        Some(format) => (path, format),
        None => {
            let mut name = path.into_os_string();
            name.push(".png");
            (PathBuf::from(name), ExportFormat::Png)
        }
    }
}

/// Target inside the configured save directory, created if missing.
pub fn default_target(config: &ExportConfig) -> Result<(PathBuf, ExportFormat), ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.save_directory))?;
    let format = ExportFormat::from(config.default_format);
    let target = directory.join(generate_filename(&config.filename_template, format));
    Ok((target, format))
}

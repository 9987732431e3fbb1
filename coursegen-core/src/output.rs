//! Timestamped course files under the configured output directory

use crate::config::OutputConfig;
use crate::generator::render_template;
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory: {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write course file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date format '{0}' in output.date_format")]
    InvalidDateFormat(String),
}

/// Writes one file per generated course
#[derive(Debug, Clone)]
pub struct CourseWriter {
    directory: PathBuf,
    filename_pattern: String,
    date_format: String,
}

impl CourseWriter {
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            filename_pattern: config.filename_pattern.clone(),
            date_format: config.date_format.clone(),
        }
    }

    /// File name for a course generated at `timestamp`.
    ///
    /// Path separators produced by the date format are replaced with `-`
    /// so the file always lands directly in the output directory.
    pub fn file_name(&self, timestamp: NaiveDateTime) -> Result<String, OutputError> {
        let mut date = String::new();
        write!(date, "{}", timestamp.format(&self.date_format))
            .map_err(|_| OutputError::InvalidDateFormat(self.date_format.clone()))?;
        let date = date.replace(['/', '\\'], "-");

        Ok(render_template(&self.filename_pattern, &[("date", &date)]))
    }

    /// Create the output directory if needed and write `content` verbatim
    pub fn write(&self, content: &str, timestamp: NaiveDateTime) -> Result<PathBuf, OutputError> {
        let file_name = self.file_name(timestamp)?;

        fs::create_dir_all(&self.directory).map_err(|source| OutputError::CreateDir {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.directory.join(file_name);
        fs::write(&path, content).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = content.len(), "course saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::Path;
    use tempfile::TempDir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(7, 5, 9))
            .unwrap()
    }

    fn writer(dir: &Path, pattern: &str, date_format: &str) -> CourseWriter {
        CourseWriter::from_config(&OutputConfig {
            directory: dir.to_string_lossy().into_owned(),
            filename_pattern: pattern.to_string(),
            date_format: date_format.to_string(),
        })
    }

    #[test]
    fn test_default_pattern_file_name() {
        let writer = CourseWriter::from_config(&OutputConfig::default());
        assert_eq!(
            writer.file_name(timestamp()).unwrap(),
            "course_20261018_070509.html"
        );
    }

    #[test]
    fn test_write_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");
        let writer = writer(&dir, "togaf_{date}.html", "%Y-%m-%d");

        let path = writer.write("<h1>Hi</h1>", timestamp()).unwrap();

        assert_eq!(path, dir.join("togaf_2026-10-18.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_date_separators_do_not_create_subdirectories() {
        let temp = TempDir::new().unwrap();
        let writer = writer(temp.path(), "course_{date}.html", "%Y/%m/%d");
        assert_eq!(
            writer.file_name(timestamp()).unwrap(),
            "course_2026-10-18.html"
        );
    }

    #[test]
    fn test_pattern_without_date_is_used_verbatim() {
        let temp = TempDir::new().unwrap();
        let writer = writer(temp.path(), "latest.html", "%Y");
        assert_eq!(writer.file_name(timestamp()).unwrap(), "latest.html");
    }

    #[test]
    fn test_invalid_date_format_is_an_error() {
        let temp = TempDir::new().unwrap();
        let writer = writer(temp.path(), "course_{date}.html", "%!");
        assert!(matches!(
            writer.file_name(timestamp()),
            Err(OutputError::InvalidDateFormat(_))
        ));
    }
}

use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};

/// Where generated courses are written (`output` section)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File name template; `{date}` is replaced with the formatted timestamp
    #[serde(default = "default_filename_pattern")]
    pub filename_pattern: String,

    /// `strftime`-style format for `{date}`
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_directory() -> String {
    defaults::DEFAULT_OUTPUT_DIRECTORY.to_string()
}
fn default_filename_pattern() -> String {
    defaults::DEFAULT_FILENAME_PATTERN.to_string()
}
fn default_date_format() -> String {
    defaults::DEFAULT_DATE_FORMAT.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            filename_pattern: default_filename_pattern(),
            date_format: default_date_format(),
        }
    }
}

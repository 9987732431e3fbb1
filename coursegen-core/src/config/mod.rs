//! Configuration handling for `config.yaml`
//!
//! Loading reads the document fresh from disk, expands `${NAME}`
//! placeholders from the environment, and lets a fixed set of variables
//! override credentials and addresses. The only value ever written back is
//! `content.current_master_prompt`.

pub mod api_keys;
pub mod constants;
pub mod core;
pub mod env;
pub mod error;
pub mod loader;

pub use api_keys::{apply_env_overrides, load_dotenv};
pub use core::{ContentConfig, EmailConfig, GroqConfig, OutputConfig};
pub use env::{EnvLookup, expand_placeholders, process_env, substitute_env};
pub use error::ConfigError;
pub use loader::{ConfigManager, CourseConfig};

//! # coursegen-core
//!
//! Library behind the `coursegen` command: configuration loading with
//! `${NAME}` substitution, a Groq chat-completion client, course file
//! output and Resend email delivery.
//!
//! Every pipeline takes its providers as trait objects
//! ([`llm::LLMProvider`], [`email::EmailSender`]), so callers can swap in
//! their own implementations.
//!
//! ```rust,no_run
//! use coursegen_core::commands::generate_course;
//! use coursegen_core::config::ConfigManager;
//! use coursegen_core::email::ResendClient;
//! use coursegen_core::llm::GroqProvider;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigManager::load()?.into_config();
//! let provider = GroqProvider::from_config(&config.groq)?;
//! let sender = ResendClient::from_config(&config.email)?;
//! let now = chrono::Local::now().naive_local();
//!
//! let report = generate_course(&config, &provider, &sender, now).await?;
//! println!("saved {}", report.path.display());
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod email;
pub mod generator;
pub mod llm;
pub mod output;
pub mod ui;

pub use commands::{CommandError, CourseReport, PromptOutcome};
pub use config::{ConfigError, ConfigManager, CourseConfig};
pub use generator::{CourseGenerator, GenerationError};
pub use output::{CourseWriter, OutputError};

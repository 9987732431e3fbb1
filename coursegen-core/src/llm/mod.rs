//! # LLM Integration Layer
//!
//! A provider trait plus the Groq implementation used for both master-prompt
//! and course generation. Groq exposes an OpenAI-compatible
//! chat-completions endpoint, so requests carry a system message and a user
//! message and the reply is read from `choices[0].message.content`.
//!
//! ```rust,no_run
//! use coursegen_core::llm::{GroqProvider, LLMProvider, LLMRequest};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GroqProvider::new(std::env::var("GROQ_API_KEY")?);
//! let request = LLMRequest::single_turn(
//!     "llama-3.3-70b-versatile",
//!     "You are an experienced instructor.",
//!     "Outline a course on TOGAF".to_string(),
//! );
//! let response = provider.generate(request).await?;
//! println!("{}", response.content.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod error_display;
pub mod provider;
pub mod providers;

pub use provider::{
    FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Message, MessageRole, Usage,
};
pub use providers::GroqProvider;

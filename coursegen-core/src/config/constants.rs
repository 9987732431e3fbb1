/// Configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variables that override configuration file values
pub mod env_vars {
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
    pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
    pub const SENDER_EMAIL: &str = "SENDER_EMAIL";
    pub const RECIPIENT_EMAIL: &str = "RECIPIENT_EMAIL";
}

/// Placeholder values shipped in sample configs; treated as "not configured"
pub mod placeholders {
    pub const GROQ_API_KEY: &str = "gsk_xxxxx";
    pub const RESEND_API_KEY: &str = "re_xxxxxxxxxxxx";
}

/// Model ID constants for the Groq chat-completions API
pub mod models {
    pub mod groq {
        pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
        pub const SUPPORTED_MODELS: &[&str] = &[
            "llama-3.3-70b-versatile",
            "llama-3.1-8b-instant",
            "mixtral-8x7b-32768",
            "gemma2-9b-it",
        ];
    }
}

/// Provider endpoints
pub mod urls {
    pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
    pub const RESEND_API_BASE: &str = "https://api.resend.com";
}

/// Message role constants
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// Default values for optional configuration fields
pub mod defaults {
    pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert educator who writes clear, well-structured course material. Always answer with a complete HTML document.";
    pub const DEFAULT_OUTPUT_DIRECTORY: &str = "courses";
    pub const DEFAULT_FILENAME_PATTERN: &str = "course_{date}.html";
    pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
    pub const DEFAULT_SENDER_NAME: &str = "Course Generator";
    pub const DEFAULT_TOPIC: &str = "Course Topic";
    pub const MAX_TOPIC_LENGTH: usize = 50;
    pub const API_KEY_PREVIEW_CHARS: usize = 10;
}

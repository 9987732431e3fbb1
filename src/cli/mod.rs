//! Command-line interface: argument parsing and one handler per run mode

pub mod args;
pub mod course;
pub mod generate_prompt;
pub mod test_email;

pub use args::{Cli, Mode};
pub use course::handle_course_command;
pub use generate_prompt::handle_generate_prompt_command;
pub use test_email::handle_test_email_command;

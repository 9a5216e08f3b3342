pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

/// Prefixed text for prompts that need a warning look but go through dialoguer.
pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}

//! Output macros for application messages.
//!
//! Every macro routes its message one of two ways:
//!
//! ```text
//! msg_info!(Message::..) ──▶ TODO_LIST_DEBUG or RUST_LOG set? ──▶ tracing::info!
//!                                                        └─ no ──▶ println!
//! ```
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error!`**: ❌ prefix, stderr outside debug mode
//! - **`msg_debug!`**: 🔍 prefix, debug mode only
//! - **`msg_error_anyhow!`**: wraps a message in an `anyhow::Error`
//!
//! `msg_print!` also takes a trailing `true` to pad the line with blank lines.
//!
//! ```rust
//! use todo_list::{msg_print, msg_success};
//! use todo_list::libs::messages::Message;
//!
//! msg_success!(Message::TaskDeleted(3));
//! msg_print!(Message::TasksHeader, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should go through `tracing`. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TODO_LIST_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Sends one formatted line to `tracing` at `$level` in debug mode, otherwise
/// to `$print` (`println` or `eprintln`).
#[doc(hidden)]
#[macro_export]
macro_rules! msg_emit {
    ($level:ident, $print:ident, $fmt:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($fmt, $msg);
        } else {
            $print!($fmt, $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::msg_emit!(info, println, "✅ {}", $msg)
    };
}

/// Errors go to stderr so table output on stdout stays clean.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::msg_emit!(error, eprintln, "❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::msg_emit!(warn, println, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::msg_emit!(info, println, "ℹ️ {}", $msg)
    };
}

/// Suppressed entirely outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

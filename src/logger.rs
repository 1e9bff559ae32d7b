//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "scanning {} documents", count);
//! debug!("content"; "doc `{}` -> {}", id, route);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// `error` and `warning` go to stderr so `show` output stays clean JSON.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let stream = target_stream(&module_lower);
    let line = format!("{} {message}", colorize_prefix(module, &module_lower, stream));

    if matches!(stream, Stream::Stderr) {
        let mut err = stderr().lock();
        writeln!(err, "{line}").ok();
        err.flush().ok();
    } else {
        let mut out = stdout().lock();
        writeln!(out, "{line}").ok();
        out.flush().ok();
    }
}

/// Stream a module's lines are written to.
fn target_stream(module_lower: &str) -> Stream {
    match module_lower {
        "error" | "warning" | "hint" => Stream::Stderr,
        _ => Stream::Stdout,
    }
}

/// Apply color to a module prefix based on module type.
///
/// Honors the global `--color` override and the TTY state of `stream`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let style = match module_lower {
        "check" => Style::new().bright_blue().bold(),
        "build" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        "hint" => Style::new().bright_cyan().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    let prefix = format!("[{module}]");
    prefix
        .if_supports_color(stream, |p| p.style(style))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("check", "check", Stream::Stdout), "[check]");
        assert_eq!(colorize_prefix("Warning", "warning", Stream::Stderr), "[Warning]");
        owo_colors::unset_override();
    }

    #[test]
    fn test_diagnostics_go_to_stderr() {
        assert!(matches!(target_stream("warning"), Stream::Stderr));
        assert!(matches!(target_stream("error"), Stream::Stderr));
        assert!(matches!(target_stream("check"), Stream::Stdout));
        assert!(matches!(target_stream("build"), Stream::Stdout));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}

//! Utility modules.

/// Log sanitization utilities to keep response bodies and API keys out of logs.
pub mod log_sanitizer;

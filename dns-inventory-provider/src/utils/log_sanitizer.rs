//! Keeps response bodies bounded and API keys hidden in debug/error logs.

/// Bytes of a body kept in log output.
const BODY_LOG_LIMIT: usize = 256;

/// Trailing characters of a secret left visible by [`mask_secret`].
const VISIBLE_SUFFIX: usize = 4;

/// Shorten a body for logging, never splitting a UTF-8 sequence.
///
/// Bodies within the limit come back unchanged; longer ones are cut and
/// tagged with their full byte length.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(idx, _)| idx)
        .take_while(|&idx| idx <= BODY_LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

/// Mask a secret, leaving only its last few characters visible.
///
/// Short secrets are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= VISIBLE_SUFFIX * 2 {
        return "*".repeat(count);
    }
    let suffix: String = secret.chars().skip(count - VISIBLE_SUFFIX).collect();
    format!("{}{suffix}", "*".repeat(count - VISIBLE_SUFFIX))
}

//! String validation functions

use alloc::format;
use alloc::string::String;

/// True when the value has no content other than whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates minimum length, counted in characters rather than bytes
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// URL validation (basic)
///
/// Requires an http or https scheme followed by a host containing a dot.
pub fn is_valid_url(url: &str) -> bool {
    let Some(after_protocol) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };

    let host = after_protocol.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() || host.contains(char::is_whitespace) {
        return false;
    }

    host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
}

//! ID prefixes and generation.
//!
//! IDs look like `log-a3f8b2c1`: a short entity prefix, a dash, and eight
//! lowercase hex characters.

use crate::errors::CoreError;

/// Prefix for drafted update logs.
pub const PREFIX_LOG: &str = "log";

/// Generate a fresh random ID with the given prefix.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to generate id: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

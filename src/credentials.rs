//! Model provider credential checks.

use crate::error::{ArctlError, Result};

/// Provider id (lowercase) to the environment variable holding its API key.
///
/// Adding a provider means adding a row here.
pub const PROVIDER_API_KEYS: &[(&str, &str)] = &[
    ("openai", "OPENAI_API_KEY"),
    ("anthropic", "ANTHROPIC_API_KEY"),
    ("gemini", "GOOGLE_API_KEY"),
    ("azureopenai", "AZUREOPENAI_API_KEY"),
];

/// Environment variable required by `provider`, matched case-insensitively.
///
/// Returns `None` for an empty or unknown provider.
pub fn required_env_var(provider: &str) -> Option<&'static str> {
    PROVIDER_API_KEYS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(provider))
        .map(|(_, var)| *var)
}

/// Check that the API key for `provider` is present in the environment.
///
/// Unknown providers are let through: their credentials are handled elsewhere.
pub fn validate_api_key(provider: &str) -> Result<()> {
    let Some(var) = required_env_var(provider) else {
        if !provider.is_empty() {
            tracing::debug!("No known API key for provider '{}'", provider);
        }
        return Ok(());
    };

    // Any non-empty value counts, including one that is not valid UTF-8
    match std::env::var_os(var) {
        Some(value) if !value.is_empty() => {
            tracing::debug!("Found {} for provider '{}'", var, provider);
            Ok(())
        }
        _ => Err(ArctlError::MissingCredential(var)),
    }
}

//! The opaque API key issued by the validation service

use std::fmt;

use crate::constants::CREDENTIAL_LOG_PREFIX_LEN;

/// Opaque bearer token authorizing validation requests.
///
/// `Debug` and [`Credential::fingerprint`] only reveal the first few
/// characters, so a credential can be passed to `tracing` fields safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token, as sent in the auth header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short, log-safe prefix of the token (e.g., "abcd1234...").
    pub fn fingerprint(&self) -> String {
        let prefix: String = self.0.chars().take(CREDENTIAL_LOG_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.fingerprint()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let credential = Credential::new("abcdefghijklmnopqrstuvwxyz");
        let debug = format!("{credential:?}");
        assert_eq!(debug, "Credential(\"abcdefgh...\")");
        assert!(!debug.contains("xyz"));
    }

    #[test]
    fn fingerprint_handles_short_and_multibyte_tokens() {
        assert_eq!(Credential::new("abc").fingerprint(), "abc...");
        assert_eq!(Credential::new("ééééééééé").fingerprint(), "éééééééé...");
    }
}

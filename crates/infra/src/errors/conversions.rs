//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use tldcheck_core::ApiError;
use tldcheck_domain::TldCheckError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TldCheckError);

impl From<InfraError> for TldCheckError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TldCheckError> for InfraError {
    fn from(value: TldCheckError) -> Self {
        InfraError(value)
    }
}

trait IntoTldCheckError {
    fn into_tldcheck(self) -> TldCheckError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → TldCheckError */
/* -------------------------------------------------------------------------- */

impl IntoTldCheckError for KeyringError {
    fn into_tldcheck(self) -> TldCheckError {
        use KeyringError::*;

        let description = self.to_string();

        match self {
            NoEntry => TldCheckError::NotFound("keychain entry not found".into()),
            BadEncoding(_) => {
                TldCheckError::Security("credential in keychain is not valid UTF-8".into())
            }
            TooLong(name, limit) => TldCheckError::Security(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                TldCheckError::Security(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            PlatformFailure(err) => {
                TldCheckError::Security(format!("keychain platform error: {err}"))
            }
            NoStorageAccess(err) => {
                TldCheckError::Security(format!("unable to access secure storage: {err}"))
            }
            _ => TldCheckError::Security(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_tldcheck())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error / serde_json::Error → TldCheckError */
/* -------------------------------------------------------------------------- */

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        let mapped = match value.kind() {
            std::io::ErrorKind::NotFound => TldCheckError::NotFound(value.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                TldCheckError::Storage(format!("permission denied: {value}"))
            }
            _ => TldCheckError::Storage(value.to_string()),
        };
        InfraError(mapped)
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(TldCheckError::Storage(format!("malformed credential file: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TldCheckError / ApiError */
/* -------------------------------------------------------------------------- */

impl IntoTldCheckError for HttpError {
    fn into_tldcheck(self) -> TldCheckError {
        if self.is_builder() {
            return TldCheckError::Config(format!("invalid HTTP client configuration: {self}"));
        }
        if self.is_timeout() {
            return TldCheckError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return TldCheckError::Network("HTTP connection failure".into());
        }

        TldCheckError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_tldcheck())
    }
}

/// Map a transport failure (no usable HTTP response) to the dispatcher error.
///
/// The message is what the user sees, so the request URL is stripped.
pub fn transport_error(err: HttpError) -> ApiError {
    if err.is_builder() {
        return ApiError::Config(format!("invalid request: {err}"));
    }
    if err.is_timeout() {
        return ApiError::Network("Request timed out".into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return ApiError::Network("Unable to connect to the validation service".into());
    }

    if err.is_decode() {
        return ApiError::Decode(err.without_url().to_string());
    }

    ApiError::Network(err.without_url().to_string())
}

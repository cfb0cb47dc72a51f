//! Validation workflow - core business logic

use std::sync::Arc;

use tldcheck_domain::{ValidationField, ValidationOutcome};
use tracing::{debug, warn};

use super::ports::ValidationApi;
use crate::credentials::Session;
use crate::errors::WorkflowError;
use crate::inflight::InFlight;

/// Domain and TLD validation entry points.
///
/// Both send to the same endpoint and differ only in the request field. Each
/// entry point is its own workflow: a new call discards the late result of an
/// earlier call of the same entry point.
pub struct ValidationService {
    api: Arc<dyn ValidationApi>,
    session: Arc<Session>,
    domain_calls: InFlight,
    tld_calls: InFlight,
}

impl ValidationService {
    pub fn new(api: Arc<dyn ValidationApi>, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            domain_calls: InFlight::new("validate_domain"),
            tld_calls: InFlight::new("validate_tld"),
        }
    }

    /// Validate a full domain name; the service extracts its TLD.
    pub async fn validate_domain(&self, input: &str) -> Result<ValidationOutcome, WorkflowError> {
        self.validate(ValidationField::Domain, input).await
    }

    /// Validate a bare TLD (e.g., "com").
    pub async fn validate_tld(&self, input: &str) -> Result<ValidationOutcome, WorkflowError> {
        self.validate(ValidationField::Tld, input).await
    }

    async fn validate(
        &self,
        field: ValidationField,
        input: &str,
    ) -> Result<ValidationOutcome, WorkflowError> {
        let calls = self.calls(field);
        let ticket = calls.begin();

        let input = input.trim();
        if input.is_empty() {
            return Err(WorkflowError::MissingInput(field));
        }
        if !self.session.has_credential() {
            return Err(WorkflowError::MissingCredential);
        }

        let request = field.request(input);
        debug!(?field, value = %request.value(), "submitting validation request");

        let response = calls.settle(ticket, self.api.validate(&request).await)?;
        let result = response.inspect_err(|err| {
            warn!(?field, error = %err, category = ?err.category(), "validation request failed");
        })?;

        Ok(ValidationOutcome::from(result))
    }

    fn calls(&self, field: ValidationField) -> &InFlight {
        match field {
            ValidationField::Domain => &self.domain_calls,
            ValidationField::Tld => &self.tld_calls,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tldcheck_domain::{Credential, OutcomeKind, ValidationRequest, ValidationResult};

    use super::*;
    use crate::errors::ApiError;
    use crate::testing::FakeApi;

    fn result(is_valid: bool, message: &str) -> ValidationResult {
        ValidationResult { is_valid, message: message.to_string() }
    }

    fn service_with_key(api: &Arc<FakeApi>) -> ValidationService {
        let session = Arc::new(Session::with_credential(Credential::new("test-key")));
        ValidationService::new(api.clone(), session)
    }

    #[tokio::test]
    async fn domain_sends_trimmed_domain_field_only() {
        let api = Arc::new(FakeApi::new());
        api.push_validate(Ok(result(true, "ok")));
        let service = service_with_key(&api);

        service.validate_domain("  example.com \n").await.unwrap();

        assert_eq!(api.requests(), vec![ValidationRequest::Domain("example.com".into())]);
    }

    #[tokio::test]
    async fn tld_sends_tld_field_only() {
        let api = Arc::new(FakeApi::new());
        api.push_validate(Ok(result(true, "ok")));
        let service = service_with_key(&api);

        service.validate_tld("com").await.unwrap();

        assert_eq!(api.requests(), vec![ValidationRequest::Tld("com".into())]);
    }

    #[tokio::test]
    async fn valid_result_is_success_with_message() {
        let api = Arc::new(FakeApi::new());
        api.push_validate(Ok(result(true, "ok")));
        let service = service_with_key(&api);

        let outcome = service.validate_tld("com").await.unwrap();

        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert_eq!(outcome.message, "ok");
    }

    #[tokio::test]
    async fn invalid_result_is_failure_with_message() {
        let api = Arc::new(FakeApi::new());
        api.push_validate(Ok(result(false, "bad")));
        let service = service_with_key(&api);

        let outcome = service.validate_domain("example.invalid").await.unwrap();

        assert_eq!(outcome.kind, OutcomeKind::Failure);
        assert_eq!(outcome.message, "bad");
    }

    #[tokio::test]
    async fn whitespace_input_never_reaches_network() {
        let api = Arc::new(FakeApi::new());
        let service = service_with_key(&api);

        for input in ["", "   ", "\t\n"] {
            let err = service.validate_domain(input).await.unwrap_err();
            assert!(matches!(err, WorkflowError::MissingInput(ValidationField::Domain)));
            let err = service.validate_tld(input).await.unwrap_err();
            assert!(matches!(err, WorkflowError::MissingInput(ValidationField::Tld)));
        }

        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_credential_never_reaches_network() {
        let api = Arc::new(FakeApi::new());
        let service = ValidationService::new(api.clone(), Arc::new(Session::new()));

        let err = service.validate_domain("example.com").await.unwrap_err();
        assert!(matches!(err, WorkflowError::MissingCredential));
        let err = service.validate_tld("com").await.unwrap_err();
        assert!(matches!(err, WorkflowError::MissingCredential));

        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_input_is_checked_before_credential() {
        let api = Arc::new(FakeApi::new());
        let service = ValidationService::new(api.clone(), Arc::new(Session::new()));

        let err = service.validate_tld(" ").await.unwrap_err();

        assert!(matches!(err, WorkflowError::MissingInput(_)));
    }

    #[tokio::test]
    async fn api_error_message_is_surfaced() {
        let api = Arc::new(FakeApi::new());
        api.push_validate(Err(ApiError::Rejected { status: 401, message: "invalid key".into() }));
        let service = service_with_key(&api);

        let err = service.validate_tld("com").await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(_)));
        assert_eq!(err.to_string(), "invalid key");
    }

    #[tokio::test]
    async fn late_response_of_same_workflow_is_discarded() {
        let api = Arc::new(FakeApi::new());
        api.push_validate_after(Duration::from_millis(50), Ok(result(true, "first")));
        api.push_validate(Ok(result(false, "second")));
        let service = service_with_key(&api);

        let (first, second) =
            tokio::join!(service.validate_tld("com"), service.validate_tld("zzz"));

        assert!(matches!(first, Err(WorkflowError::Superseded)));
        assert_eq!(second.unwrap().message, "second");
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn domain_and_tld_workflows_do_not_supersede_each_other() {
        let api = Arc::new(FakeApi::new());
        api.push_validate_after(Duration::from_millis(30), Ok(result(true, "domain")));
        api.push_validate(Ok(result(true, "tld")));
        let service = service_with_key(&api);

        let (domain, tld) =
            tokio::join!(service.validate_domain("example.com"), service.validate_tld("com"));

        assert_eq!(domain.unwrap().message, "domain");
        assert_eq!(tld.unwrap().message, "tld");
    }

    #[tokio::test]
    async fn repeated_calls_are_independent() {
        let api = Arc::new(FakeApi::new());
        api.push_validate(Ok(result(true, "one")));
        api.push_validate(Ok(result(true, "two")));
        let service = service_with_key(&api);

        assert_eq!(service.validate_tld("com").await.unwrap().message, "one");
        assert_eq!(service.validate_tld("com").await.unwrap().message, "two");
    }
}

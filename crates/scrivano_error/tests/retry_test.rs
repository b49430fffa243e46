//! Tests for retry classification of service errors.

use scrivano_error::{RetryableError, ServiceError, ServiceErrorKind};

#[test]
fn every_service_kind_is_caller_retryable() {
    for kind in [
        ServiceErrorKind::Quota,
        ServiceErrorKind::Network,
        ServiceErrorKind::Timeout,
    ] {
        let err = ServiceError::new(kind, "scripted");
        assert!(err.is_retryable(), "{kind} should be retryable");
    }
}

#[test]
fn quota_backs_off_longer_than_timeouts() {
    let (quota_backoff, quota_retries, _) =
        ServiceError::new(ServiceErrorKind::Quota, "429").retry_strategy_params();
    let (timeout_backoff, timeout_retries, _) =
        ServiceError::new(ServiceErrorKind::Timeout, "slow").retry_strategy_params();

    assert!(quota_backoff > timeout_backoff);
    assert!(quota_retries <= timeout_retries);
}

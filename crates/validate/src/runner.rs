//! Aggregating runner
//!
//! The four entry points that drive a list of checks against one target.
//! The collect-all variants run every check and report all failures
//! together; the fail-fast variants stop at the first failure. A missing
//! target is reported before any check runs, in both modes.

use httpvet_domain::{RequestSpec, ResponseSpec};
use tracing::{debug, trace};

use crate::error::{CheckError, MultiError, TargetKind};
use crate::validator::{RequestValidator, ResponseValidator};

/// Validates a request against every check, collecting all failures.
///
/// Every check is invoked exactly once in the supplied order, regardless
/// of earlier failures. Failures of either kind accumulate into a single
/// flattened [`MultiError`].
///
/// # Errors
///
/// Returns [`CheckError::MissingTarget`] if `request` is `None`, or
/// [`CheckError::Multi`] listing every failure in encounter order.
pub fn validate_request(
    request: Option<&RequestSpec>,
    checks: &[&dyn RequestValidator],
) -> Result<(), CheckError> {
    let Some(request) = request else {
        return Err(CheckError::MissingTarget(TargetKind::Request));
    };

    let mut failures = MultiError::new();
    for (index, check) in checks.iter().enumerate() {
        if let Err(error) = check.validate_request(request) {
            trace!(index, %error, "request check failed");
            failures.push(error);
        }
    }
    debug!(
        total = checks.len(),
        failed = failures.len(),
        "request validation finished"
    );
    failures.into_result()
}

/// Validates a request, stopping at the first failing check.
///
/// Checks after the first failure are never invoked; the failing check's
/// error is returned verbatim.
///
/// # Errors
///
/// Returns [`CheckError::MissingTarget`] if `request` is `None`, or the
/// first failure encountered.
pub fn validate_request_fail_fast(
    request: Option<&RequestSpec>,
    checks: &[&dyn RequestValidator],
) -> Result<(), CheckError> {
    let Some(request) = request else {
        return Err(CheckError::MissingTarget(TargetKind::Request));
    };

    for (index, check) in checks.iter().enumerate() {
        if let Err(error) = check.validate_request(request) {
            trace!(index, %error, "request check failed, stopping");
            return Err(error);
        }
    }
    Ok(())
}

/// Validates a response against every check, collecting all failures.
///
/// Every check is invoked exactly once in the supplied order, regardless
/// of earlier failures. Failures of either kind accumulate into a single
/// flattened [`MultiError`].
///
/// # Errors
///
/// Returns [`CheckError::MissingTarget`] if `response` is `None`, or
/// [`CheckError::Multi`] listing every failure in encounter order.
pub fn validate_response(
    response: Option<&ResponseSpec>,
    checks: &[&dyn ResponseValidator],
) -> Result<(), CheckError> {
    let Some(response) = response else {
        return Err(CheckError::MissingTarget(TargetKind::Response));
    };

    let mut failures = MultiError::new();
    for (index, check) in checks.iter().enumerate() {
        if let Err(error) = check.validate_response(response) {
            trace!(index, %error, "response check failed");
            failures.push(error);
        }
    }
    debug!(
        total = checks.len(),
        failed = failures.len(),
        "response validation finished"
    );
    failures.into_result()
}

/// Validates a response, stopping at the first failing check.
///
/// Checks after the first failure are never invoked; the failing check's
/// error is returned verbatim.
///
/// # Errors
///
/// Returns [`CheckError::MissingTarget`] if `response` is `None`, or the
/// first failure encountered.
pub fn validate_response_fail_fast(
    response: Option<&ResponseSpec>,
    checks: &[&dyn ResponseValidator],
) -> Result<(), CheckError> {
    let Some(response) = response else {
        return Err(CheckError::MissingTarget(TargetKind::Response));
    };

    for (index, check) in checks.iter().enumerate() {
        if let Err(error) = check.validate_response(response) {
            trace!(index, %error, "response check failed, stopping");
            return Err(error);
        }
    }
    Ok(())
}

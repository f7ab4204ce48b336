//! Single-read body cache
//!
//! Body streams are single-consumption, so two independent body checks
//! cannot both read the target. [`BodyCache`] reads the stream exactly
//! once and fans the bytes out to every registered check. The group always
//! exhausts its own checks under the collect-all policy, even when driven
//! by a fail-fast runner; from the outside it behaves as one unit.

use httpvet_domain::{RequestSpec, ResponseSpec};
use tracing::trace;

use crate::body::BodyValidator;
use crate::error::{CheckError, InternalError, MultiError};
use crate::validator::{RequestValidator, ResponseValidator};

/// A composite check that shares one body read across many body checks.
pub struct BodyCache {
    checks: Vec<BodyValidator>,
}

/// Groups body checks behind a single read of the target's body.
#[must_use]
pub fn cache_body(checks: impl IntoIterator<Item = BodyValidator>) -> BodyCache {
    BodyCache {
        checks: checks.into_iter().collect(),
    }
}

impl BodyCache {
    fn check_all(&self, body: &[u8]) -> Result<(), CheckError> {
        let mut failures = MultiError::new();
        for (index, check) in self.checks.iter().enumerate() {
            if let Err(error) = check.check(body) {
                trace!(index, %error, "body check failed");
                failures.push(error);
            }
        }
        failures.into_result()
    }
}

impl RequestValidator for BodyCache {
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        let bytes = request
            .body
            .read_to_end()
            .map_err(|e| InternalError::new(e).wrap("failed to read request body"))?;
        self.check_all(&bytes)
    }
}

impl ResponseValidator for BodyCache {
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        let bytes = response
            .body
            .read_to_end()
            .map_err(|e| InternalError::new(e).wrap("failed to read response body"))?;
        self.check_all(&bytes)
    }
}

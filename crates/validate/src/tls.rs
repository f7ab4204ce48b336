//! TLS connection validators
//!
//! TLS state is optional on both targets; validators over it treat an
//! absent state as a failed expectation, never as something to crash on.

use httpvet_domain::{RequestSpec, ResponseSpec, TlsSummary, TlsVersion};

use crate::error::CheckError;
use crate::validator::{RequestValidator, ResponseValidator};

/// A validator over a request's or response's TLS connection state.
pub struct TlsValidator(
    Box<dyn Fn(Option<&TlsSummary>) -> Result<(), CheckError> + Send + Sync>,
);

impl TlsValidator {
    /// Wraps a predicate over the optional TLS state.
    #[must_use]
    pub fn new(
        f: impl Fn(Option<&TlsSummary>) -> Result<(), CheckError> + Send + Sync + 'static,
    ) -> Self {
        Self(Box::new(f))
    }
}

impl RequestValidator for TlsValidator {
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        (self.0)(request.tls.as_ref())
    }
}

impl ResponseValidator for TlsValidator {
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        (self.0)(response.tls.as_ref())
    }
}

/// Checks that the exchange happened over TLS.
#[must_use]
pub fn is_present() -> TlsValidator {
    TlsValidator::new(|tls| {
        if tls.is_some() {
            Ok(())
        } else {
            Err(CheckError::validation("no TLS connection state"))
        }
    })
}

/// Checks that the exchange did not happen over TLS.
#[must_use]
pub fn is_absent() -> TlsValidator {
    TlsValidator::new(|tls| {
        if tls.is_some() {
            Err(CheckError::validation("TLS connection state is present"))
        } else {
            Ok(())
        }
    })
}

/// Checks that the negotiated TLS version equals the given version.
///
/// Fails with a validation error if no TLS state is present.
#[must_use]
pub fn version_is(expected: TlsVersion) -> TlsValidator {
    TlsValidator::new(move |tls| match tls {
        None => Err(CheckError::validation("no TLS connection state")),
        Some(summary) if summary.version == expected => Ok(()),
        Some(summary) => Err(CheckError::validation(format!(
            "expected TLS version {:?}, found {:?}",
            expected.as_str(),
            summary.version.as_str()
        ))),
    })
}

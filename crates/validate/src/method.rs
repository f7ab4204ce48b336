//! Request method validators

use httpvet_domain::{HttpMethod, RequestSpec};

use crate::error::CheckError;
use crate::validator::RequestValidator;

/// A validator over a request's method.
pub struct MethodValidator(Box<dyn Fn(HttpMethod) -> Result<(), CheckError> + Send + Sync>);

impl MethodValidator {
    /// Wraps a predicate over the request method.
    #[must_use]
    pub fn new(f: impl Fn(HttpMethod) -> Result<(), CheckError> + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl RequestValidator for MethodValidator {
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        (self.0)(request.method)
    }
}

/// Checks that the request method equals the given method.
#[must_use]
pub fn is(expected: HttpMethod) -> MethodValidator {
    MethodValidator::new(move |method| {
        if method == expected {
            Ok(())
        } else {
            Err(CheckError::validation(format!(
                "expected method {:?}, found {:?}",
                expected.as_str(),
                method.as_str()
            )))
        }
    })
}

/// Checks that the request method does not equal the given method.
#[must_use]
pub fn is_not(rejected: HttpMethod) -> MethodValidator {
    MethodValidator::new(move |method| {
        if method == rejected {
            Err(CheckError::validation(format!(
                "expected method to not be {:?}",
                rejected.as_str()
            )))
        } else {
            Ok(())
        }
    })
}

/// Checks that the request is a GET request.
#[must_use]
pub fn is_get() -> MethodValidator {
    is(HttpMethod::Get)
}

/// Checks that the request is a POST request.
#[must_use]
pub fn is_post() -> MethodValidator {
    is(HttpMethod::Post)
}

/// Checks that the request is a PUT request.
#[must_use]
pub fn is_put() -> MethodValidator {
    is(HttpMethod::Put)
}

/// Checks that the request is a PATCH request.
#[must_use]
pub fn is_patch() -> MethodValidator {
    is(HttpMethod::Patch)
}

/// Checks that the request is a DELETE request.
#[must_use]
pub fn is_delete() -> MethodValidator {
    is(HttpMethod::Delete)
}

/// Checks that the request is an OPTIONS request.
#[must_use]
pub fn is_options() -> MethodValidator {
    is(HttpMethod::Options)
}

//! Response status code validators

use httpvet_domain::{ResponseSpec, StatusCode};

use crate::error::CheckError;
use crate::validator::ResponseValidator;

/// A validator over a response's status code.
pub struct StatusValidator(Box<dyn Fn(StatusCode) -> Result<(), CheckError> + Send + Sync>);

impl StatusValidator {
    /// Wraps a predicate over the response status code.
    #[must_use]
    pub fn new(f: impl Fn(StatusCode) -> Result<(), CheckError> + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl ResponseValidator for StatusValidator {
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        (self.0)(response.status)
    }
}

/// Checks that the status code equals the given code.
#[must_use]
pub fn is(expected: u16) -> StatusValidator {
    StatusValidator::new(move |status| {
        if status == expected {
            Ok(())
        } else {
            Err(CheckError::validation(format!(
                "expected status code {expected}, got {status}"
            )))
        }
    })
}

/// Checks that the status code does not equal the given code.
#[must_use]
pub fn is_not(rejected: u16) -> StatusValidator {
    StatusValidator::new(move |status| {
        if status == rejected {
            Err(CheckError::validation(format!(
                "expected status code to not be {rejected}"
            )))
        } else {
            Ok(())
        }
    })
}

/// Checks that the status code is 200.
#[must_use]
pub fn is_ok() -> StatusValidator {
    is(200)
}

/// Checks that the status code is in the half-open range `[min, max)`.
#[must_use]
pub fn in_range(min: u16, max: u16) -> StatusValidator {
    StatusValidator::new(move |status| {
        let code = status.as_u16();
        if code < min || code >= max {
            Err(CheckError::validation(format!(
                "expected status code to be in range [{min}, {max}), got {code}"
            )))
        } else {
            Ok(())
        }
    })
}

/// Checks that the status code is not in the half-open range `[min, max)`.
#[must_use]
pub fn not_in_range(min: u16, max: u16) -> StatusValidator {
    StatusValidator::new(move |status| {
        let code = status.as_u16();
        if code >= min && code < max {
            Err(CheckError::validation(format!(
                "expected status code to not be in range [{min}, {max})"
            )))
        } else {
            Ok(())
        }
    })
}

/// Checks that the status code is informational (1xx).
#[must_use]
pub fn is_1xx() -> StatusValidator {
    in_range(100, 200)
}

/// Checks that the status code is a success (2xx).
#[must_use]
pub fn is_2xx() -> StatusValidator {
    in_range(200, 300)
}

/// Checks that the status code is a redirection (3xx).
#[must_use]
pub fn is_3xx() -> StatusValidator {
    in_range(300, 400)
}

/// Checks that the status code is a client error (4xx).
#[must_use]
pub fn is_4xx() -> StatusValidator {
    in_range(400, 500)
}

/// Checks that the status code is a server error (5xx).
#[must_use]
pub fn is_5xx() -> StatusValidator {
    in_range(500, 600)
}

/// Checks that the status code is not an error (neither 4xx nor 5xx).
#[must_use]
pub fn not_error() -> StatusValidator {
    not_in_range(400, 600)
}

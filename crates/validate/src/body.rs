//! Body content validators
//!
//! A [`BodyValidator`] is a pure predicate over the fully-read body bytes.
//! Used directly it consumes the target's body stream itself; when more
//! than one body check runs against the same target, group them with
//! [`crate::cache::cache_body`] so the stream is read only once.

use httpvet_domain::{RequestSpec, ResponseSpec};
use serde::de::DeserializeOwned;

use crate::error::{CheckError, InternalError};
use crate::validator::{RequestValidator, ResponseValidator};

/// A validator over a request's or response's body bytes.
pub struct BodyValidator(Box<dyn Fn(&[u8]) -> Result<(), CheckError> + Send + Sync>);

impl BodyValidator {
    /// Wraps a predicate over the body bytes.
    #[must_use]
    pub fn new(f: impl Fn(&[u8]) -> Result<(), CheckError> + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Runs the predicate against an already-read body.
    ///
    /// # Errors
    ///
    /// Returns the predicate's failure, if any.
    pub fn check(&self, body: &[u8]) -> Result<(), CheckError> {
        (self.0)(body)
    }
}

impl RequestValidator for BodyValidator {
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        let bytes = request
            .body
            .read_to_end()
            .map_err(|e| InternalError::new(e).wrap("failed to read request body"))?;
        self.check(&bytes)
    }
}

impl ResponseValidator for BodyValidator {
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        let bytes = response
            .body
            .read_to_end()
            .map_err(|e| InternalError::new(e).wrap("failed to read response body"))?;
        self.check(&bytes)
    }
}

/// Checks that the body equals the given bytes.
#[must_use]
pub fn equals(expected: impl Into<Vec<u8>>) -> BodyValidator {
    let expected = expected.into();
    BodyValidator::new(move |body| {
        if body == expected.as_slice() {
            Ok(())
        } else {
            Err(CheckError::validation("body is not equal to expected content"))
        }
    })
}

/// Checks that the body equals the given string.
#[must_use]
pub fn equals_str(expected: &str) -> BodyValidator {
    equals(expected.as_bytes().to_vec())
}

/// Checks that the body parses as JSON.
#[must_use]
pub fn is_valid_json() -> BodyValidator {
    BodyValidator::new(|body| {
        if serde_json::from_slice::<serde_json::Value>(body).is_ok() {
            Ok(())
        } else {
            Err(CheckError::validation("body is not valid JSON"))
        }
    })
}

/// Checks that the body decodes as the given type from JSON.
#[must_use]
pub fn json_decodes_as<T: DeserializeOwned>() -> BodyValidator {
    BodyValidator::new(|body| match serde_json::from_slice::<T>(body) {
        Ok(_) => Ok(()),
        Err(e) => Err(CheckError::validation(format!("body JSON decode failed: {e}"))),
    })
}

/// Checks that the body has the given length in bytes.
#[must_use]
pub fn length_is(expected: usize) -> BodyValidator {
    BodyValidator::new(move |body| {
        let actual = body.len();
        if actual == expected {
            Ok(())
        } else {
            Err(CheckError::validation(format!(
                "expected body length to be {expected}, got {actual}"
            )))
        }
    })
}

/// Checks that the body is empty.
#[must_use]
pub fn is_empty() -> BodyValidator {
    BodyValidator::new(|body| {
        if body.is_empty() {
            Ok(())
        } else {
            Err(CheckError::validation("body is not empty"))
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use httpvet_domain::{Body, HttpMethod};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    fn request(body: &str) -> RequestSpec {
        RequestSpec::parse(HttpMethod::Post, "https://example.com/")
            .unwrap()
            .with_body(body)
    }

    #[test]
    fn test_equals() {
        assert!(equals_str("hello").validate_request(&request("hello")).is_ok());
        assert!(equals_str("hello").validate_request(&request("other")).is_err());
    }

    #[test]
    fn test_is_valid_json() {
        assert!(
            is_valid_json()
                .validate_request(&request(r#"{"ok":true}"#))
                .is_ok()
        );

        let err = is_valid_json()
            .validate_request(&request("{{{{"))
            .unwrap_err();
        assert_eq!(err.to_string(), "body is not valid JSON");
    }

    #[test]
    fn test_json_decodes_as() {
        #[derive(Deserialize)]
        struct User {
            #[allow(dead_code)]
            name: String,
        }

        assert!(
            json_decodes_as::<User>()
                .validate_request(&request(r#"{"name":"sam"}"#))
                .is_ok()
        );
        assert!(
            json_decodes_as::<User>()
                .validate_request(&request(r#"{"id":1}"#))
                .is_err()
        );
    }

    #[test]
    fn test_length_is() {
        assert!(length_is(5).validate_request(&request("hello")).is_ok());

        let err = length_is(3).validate_request(&request("hello")).unwrap_err();
        assert_eq!(err.to_string(), "expected body length to be 3, got 5");
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty().validate_request(&request("")).is_ok());
        assert!(is_empty().validate_request(&request("x")).is_err());
    }

    #[test]
    fn test_unreadable_body_is_internal() {
        struct Broken;
        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("connection reset"))
            }
        }

        let req = RequestSpec::parse(HttpMethod::Post, "https://example.com/")
            .unwrap()
            .with_body(Body::from_reader(Broken));

        let err = is_empty().validate_request(&req).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(
            err.to_string(),
            "failed to read request body: connection reset"
        );
    }
}

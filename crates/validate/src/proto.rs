//! Protocol string validators

use httpvet_domain::{RequestSpec, ResponseSpec};

use crate::error::CheckError;
use crate::validator::{RequestValidator, ResponseValidator};

/// A validator over a request's or response's protocol string.
pub struct ProtoValidator(Box<dyn Fn(&str) -> Result<(), CheckError> + Send + Sync>);

impl ProtoValidator {
    /// Wraps a predicate over the protocol string.
    #[must_use]
    pub fn new(f: impl Fn(&str) -> Result<(), CheckError> + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl RequestValidator for ProtoValidator {
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        (self.0)(&request.proto)
    }
}

impl ResponseValidator for ProtoValidator {
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        (self.0)(&response.proto)
    }
}

/// Checks that the protocol string equals the given value.
#[must_use]
pub fn is(expected: &str) -> ProtoValidator {
    let expected = expected.to_string();
    ProtoValidator::new(move |proto| {
        if proto == expected {
            Ok(())
        } else {
            Err(CheckError::validation(format!(
                "expected protocol {expected:?}, found {proto:?}"
            )))
        }
    })
}

/// Checks that the protocol string does not equal the given value.
#[must_use]
pub fn is_not(rejected: &str) -> ProtoValidator {
    let rejected = rejected.to_string();
    ProtoValidator::new(move |proto| {
        if proto == rejected {
            Err(CheckError::validation(format!(
                "expected protocol to not be {rejected:?}"
            )))
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use httpvet_domain::HttpMethod;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_proto_is() {
        let req = RequestSpec::parse(HttpMethod::Get, "https://example.com/").unwrap();
        assert!(is("HTTP/1.1").validate_request(&req).is_ok());

        let err = is("HTTP/2.0").validate_request(&req).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected protocol \"HTTP/2.0\", found \"HTTP/1.1\""
        );
    }

    #[test]
    fn test_proto_is_on_response() {
        let res = ResponseSpec::new(200).with_proto("HTTP/2.0");
        assert!(is("HTTP/2.0").validate_response(&res).is_ok());
        assert!(is_not("HTTP/1.1").validate_response(&res).is_ok());
        assert!(is_not("HTTP/2.0").validate_response(&res).is_err());
    }
}

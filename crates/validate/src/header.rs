//! Header validators
//!
//! Header names are converted to canonical form before lookup, so
//! assertions are case-insensitive by default. Every constructor has a
//! `*_with` sibling that takes an explicit key function instead; pass
//! `str::to_string` (the identity) for exact, case-sensitive lookups.
//! Equality and pattern checks succeed if *at least one* value under the
//! key matches.

use httpvet_domain::{Headers, RequestSpec, ResponseSpec, canonical_key};
use regex::Regex;

use crate::error::{CheckError, InternalError};
use crate::validator::{RequestValidator, ResponseValidator};

/// The key function used to normalize header names before lookup.
pub type KeyFn = fn(&str) -> String;

/// Common header name: `Content-Type`.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Common header name: `Accept`.
pub const ACCEPT: &str = "Accept";
/// Common header name: `Host`.
pub const HOST: &str = "Host";
/// Common header name: `Authorization`.
pub const AUTHORIZATION: &str = "Authorization";
/// Common header name: `Connection`.
pub const CONNECTION: &str = "Connection";

/// A validator over a request's or response's headers.
pub struct HeaderValidator(Box<dyn Fn(&Headers) -> Result<(), CheckError> + Send + Sync>);

impl HeaderValidator {
    /// Wraps a predicate over the header map.
    #[must_use]
    pub fn new(f: impl Fn(&Headers) -> Result<(), CheckError> + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl RequestValidator for HeaderValidator {
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        (self.0)(&request.headers)
    }
}

impl ResponseValidator for HeaderValidator {
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        (self.0)(&response.headers)
    }
}

/// Checks that the header is present, regardless of its values.
#[must_use]
pub fn has(name: &str) -> HeaderValidator {
    has_with(name, canonical_key)
}

/// Like [`has`], with an explicit key function.
#[must_use]
pub fn has_with(name: &str, key_fn: KeyFn) -> HeaderValidator {
    let name = name.to_string();
    HeaderValidator::new(move |headers| {
        let key = key_fn(&name);
        if headers.values_exact(&key).is_some() {
            Ok(())
        } else {
            Err(CheckError::validation(format!("header {key:?} not found")))
        }
    })
}

/// Checks that at least one value under the header equals `value`.
#[must_use]
pub fn is(name: &str, value: &str) -> HeaderValidator {
    is_with(name, value, canonical_key)
}

/// Like [`is`], with an explicit key function.
#[must_use]
pub fn is_with(name: &str, value: &str, key_fn: KeyFn) -> HeaderValidator {
    let name = name.to_string();
    let value = value.to_string();
    HeaderValidator::new(move |headers| {
        let key = key_fn(&name);
        let Some(values) = headers.values_exact(&key) else {
            return Err(CheckError::validation(format!("header {key:?} not found")));
        };
        if values.iter().any(|v| *v == value) {
            Ok(())
        } else {
            Err(CheckError::validation(format!(
                "expected header {key:?} to have value {value:?}"
            )))
        }
    })
}

/// Checks that at least one value under the header matches the pattern.
///
/// The pattern is compiled when the check runs; an invalid pattern is an
/// internal error, not a failed expectation.
#[must_use]
pub fn matches(name: &str, pattern: &str) -> HeaderValidator {
    matches_with(name, pattern, canonical_key)
}

/// Like [`matches`], with an explicit key function.
#[must_use]
pub fn matches_with(name: &str, pattern: &str, key_fn: KeyFn) -> HeaderValidator {
    let name = name.to_string();
    let pattern = pattern.to_string();
    HeaderValidator::new(move |headers| {
        let re = Regex::new(&pattern)
            .map_err(|e| InternalError::new(e).wrap(format!("invalid header pattern {pattern:?}")))?;

        let key = key_fn(&name);
        let Some(values) = headers.values_exact(&key) else {
            return Err(CheckError::validation(format!("header {key:?} not found")));
        };
        if values.iter().any(|v| re.is_match(v)) {
            Ok(())
        } else {
            Err(CheckError::validation(format!(
                "expected header {key:?} to match {pattern:?}"
            )))
        }
    })
}

/// Checks that the `Content-Type` header is present.
#[must_use]
pub fn has_content_type() -> HeaderValidator {
    has(CONTENT_TYPE)
}

/// Checks that the `Accept` header is present.
#[must_use]
pub fn has_accept() -> HeaderValidator {
    has(ACCEPT)
}

/// Checks that the `Authorization` header is present.
#[must_use]
pub fn has_authorization() -> HeaderValidator {
    has(AUTHORIZATION)
}

/// Checks that at least one `Content-Type` value equals `value`.
#[must_use]
pub fn content_type_is(value: &str) -> HeaderValidator {
    is(CONTENT_TYPE, value)
}

/// Checks that at least one `Content-Type` value is `application/json`.
#[must_use]
pub fn content_type_is_json() -> HeaderValidator {
    content_type_is(mime::APPLICATION_JSON.as_ref())
}

/// Checks that at least one `Content-Type` value is `application/xml`.
#[must_use]
pub fn content_type_is_xml() -> HeaderValidator {
    content_type_is("application/xml")
}

/// Checks that at least one `Content-Type` value is `text/plain`.
#[must_use]
pub fn content_type_is_text() -> HeaderValidator {
    content_type_is(mime::TEXT_PLAIN.as_ref())
}

/// Checks that at least one `Authorization` value equals `value`.
#[must_use]
pub fn authorization_is(value: &str) -> HeaderValidator {
    is(AUTHORIZATION, value)
}

/// Checks that the `Authorization` header carries basic credentials
/// (`Basic <token>`).
#[must_use]
pub fn authorization_matches_basic() -> HeaderValidator {
    matches(AUTHORIZATION, "^Basic .+$")
}

/// Checks that the `Authorization` header carries a bearer token
/// (`Bearer <token>`).
#[must_use]
pub fn authorization_matches_bearer() -> HeaderValidator {
    matches(AUTHORIZATION, "^Bearer .+$")
}

//! Validator contracts
//!
//! The two capability traits a check must satisfy to be runnable by the
//! engine, plus adapters that let a plain function satisfy them. Checks
//! are stateless and must not mutate the target; consuming the body
//! stream through the body cache is the one sanctioned exception.

use httpvet_domain::{RequestSpec, ResponseSpec};

use crate::error::CheckError;

/// A check that can be evaluated against a request snapshot.
pub trait RequestValidator {
    /// Evaluates the check against the request.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] describing the failed expectation, or an
    /// internal error if the check could not run.
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError>;
}

/// A check that can be evaluated against a response snapshot.
pub trait ResponseValidator {
    /// Evaluates the check against the response.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] describing the failed expectation, or an
    /// internal error if the check could not run.
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError>;
}

/// Adapter that lets a plain function act as a [`RequestValidator`].
pub struct RequestFn<F>(F);

impl<F> RequestValidator for RequestFn<F>
where
    F: Fn(&RequestSpec) -> Result<(), CheckError>,
{
    fn validate_request(&self, request: &RequestSpec) -> Result<(), CheckError> {
        (self.0)(request)
    }
}

/// Wraps a function as a [`RequestValidator`].
pub fn request_fn<F>(f: F) -> RequestFn<F>
where
    F: Fn(&RequestSpec) -> Result<(), CheckError>,
{
    RequestFn(f)
}

/// Adapter that lets a plain function act as a [`ResponseValidator`].
pub struct ResponseFn<F>(F);

impl<F> ResponseValidator for ResponseFn<F>
where
    F: Fn(&ResponseSpec) -> Result<(), CheckError>,
{
    fn validate_response(&self, response: &ResponseSpec) -> Result<(), CheckError> {
        (self.0)(response)
    }
}

/// Wraps a function as a [`ResponseValidator`].
pub fn response_fn<F>(f: F) -> ResponseFn<F>
where
    F: Fn(&ResponseSpec) -> Result<(), CheckError>,
{
    ResponseFn(f)
}

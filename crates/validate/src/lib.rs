//! Httpvet Validate - Composable request/response assertions
//!
//! The engine drives an ordered list of checks against a request or
//! response snapshot and reports which failed. The core entry points are
//! [`validate_request`] and [`validate_response`] (collect-all policy)
//! and their fail-fast variants; checks implement the
//! [`RequestValidator`] / [`ResponseValidator`] contracts, and the
//! per-field modules ([`method`], [`status`], [`header`], [`url`],
//! [`body`], [`tls`], [`proto`]) provide ready-made predicates.
//!
//! ```
//! use httpvet_domain::{HttpMethod, RequestSpec};
//! use httpvet_validate::{cache_body, method, header, url, body, validate_request};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let req = RequestSpec::parse(HttpMethod::Post, "https://example.com/api/v1/users")?
//!     .with_header("Content-Type", "application/json")
//!     .with_body(r#"{"name":"sam"}"#);
//!
//! validate_request(
//!     Some(&req),
//!     &[
//!         &method::is_post(),
//!         &header::content_type_is_json(),
//!         &url::path_is("/api/v1/users"),
//!         &cache_body([body::is_valid_json()]),
//!     ],
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod cache;
pub mod error;
pub mod header;
pub mod method;
pub mod proto;
pub mod runner;
pub mod status;
pub mod tls;
pub mod url;
pub mod validator;

pub use cache::{BodyCache, cache_body};
pub use error::{
    BoxError, CheckError, InternalError, MultiError, TargetKind, ValidationError,
};
pub use runner::{
    validate_request, validate_request_fail_fast, validate_response, validate_response_fail_fast,
};
pub use validator::{
    RequestFn, RequestValidator, ResponseFn, ResponseValidator, request_fn, response_fn,
};

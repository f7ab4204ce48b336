//! Httpvet Domain - Request and response snapshots
//!
//! This crate defines the data model the validation engine inspects:
//! already-materialized HTTP requests and responses with a single-use
//! body stream. All types here are pure Rust with no network I/O.

pub mod body;
pub mod error;
pub mod headers;
pub mod method;
pub mod request;
pub mod response;
pub mod status;
pub mod tls;

pub use body::Body;
pub use error::{DomainError, DomainResult};
pub use headers::{Headers, canonical_key};
pub use method::HttpMethod;
pub use request::RequestSpec;
pub use response::ResponseSpec;
pub use status::StatusCode;
pub use tls::{TlsSummary, TlsVersion};

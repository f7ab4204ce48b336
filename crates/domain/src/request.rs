//! Request snapshot type

use url::Url;

use crate::body::Body;
use crate::error::{DomainError, DomainResult};
use crate::headers::Headers;
use crate::method::HttpMethod;
use crate::tls::TlsSummary;

/// Default protocol string for snapshots built by hand.
const DEFAULT_PROTO: &str = "HTTP/1.1";

/// A materialized HTTP request, as seen by validators.
///
/// Snapshots are owned by the caller and only ever read by the validation
/// engine; consuming the body stream is the one sanctioned exception.
#[derive(Debug)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Full request URL.
    pub url: Url,
    /// Request headers.
    pub headers: Headers,
    /// Single-use request body.
    pub body: Body,
    /// Protocol string, e.g. `"HTTP/1.1"`.
    pub proto: String,
    /// Negotiated TLS state, if the request went over TLS.
    pub tls: Option<TlsSummary>,
}

impl RequestSpec {
    /// Creates a request snapshot with empty headers and body.
    #[must_use]
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Headers::new(),
            body: Body::empty(),
            proto: DEFAULT_PROTO.to_string(),
            tls: None,
        }
    }

    /// Creates a request snapshot, parsing the URL from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL does not parse.
    pub fn parse(method: HttpMethod, url: &str) -> DomainResult<Self> {
        let url = Url::parse(url).map_err(|e| DomainError::InvalidUrl(e.to_string()))?;
        Ok(Self::new(method, url))
    }

    /// Appends a header to the snapshot.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the protocol string.
    #[must_use]
    pub fn with_proto(mut self, proto: impl Into<String>) -> Self {
        self.proto = proto.into();
        self
    }

    /// Attaches a TLS summary to the snapshot.
    #[must_use]
    pub const fn with_tls(mut self, tls: TlsSummary) -> Self {
        self.tls = Some(tls);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_url() {
        let req = RequestSpec::parse(HttpMethod::Get, "https://example.com/api").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url.path(), "/api");
        assert_eq!(req.proto, "HTTP/1.1");
        assert!(req.tls.is_none());
    }

    #[test]
    fn test_parse_invalid_url() {
        let err = RequestSpec::parse(HttpMethod::Get, "not a url").unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder() {
        let req = RequestSpec::parse(HttpMethod::Post, "https://example.com/users")
            .unwrap()
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"name":"sam"}"#)
            .with_proto("HTTP/2.0");

        assert_eq!(req.headers.get("content-type"), Some("application/json"));
        assert_eq!(req.proto, "HTTP/2.0");
        assert_eq!(req.body.read_to_end().unwrap(), br#"{"name":"sam"}"#);
    }
}

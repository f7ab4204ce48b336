//! Response snapshot type

use crate::body::Body;
use crate::headers::Headers;
use crate::status::StatusCode;
use crate::tls::TlsSummary;

/// Default protocol string for snapshots built by hand.
const DEFAULT_PROTO: &str = "HTTP/1.1";

/// A materialized HTTP response, as seen by validators.
///
/// Snapshots are owned by the caller and only ever read by the validation
/// engine; consuming the body stream is the one sanctioned exception.
#[derive(Debug)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: Headers,
    /// Single-use response body.
    pub body: Body,
    /// Protocol string, e.g. `"HTTP/1.1"`.
    pub proto: String,
    /// Negotiated TLS state, if the response came over TLS.
    pub tls: Option<TlsSummary>,
}

impl ResponseSpec {
    /// Creates a response snapshot with empty headers and body.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>) -> Self {
        Self {
            status: status.into(),
            headers: Headers::new(),
            body: Body::empty(),
            proto: DEFAULT_PROTO.to_string(),
            tls: None,
        }
    }

    /// Appends a header to the snapshot.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the response body.
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
    fn test_new_response() {
        let res = ResponseSpec::new(204);
        assert_eq!(res.status.as_u16(), 204);
        assert_eq!(res.proto, "HTTP/1.1");
        assert!(res.headers.is_empty());
    }

    #[test]
    fn test_builder() {
        let res = ResponseSpec::new(200)
            .with_header("Content-Type", "text/plain")
            .with_body("ok");

        assert_eq!(res.headers.get("content-type"), Some("text/plain"));
        assert_eq!(res.body.read_to_end().unwrap(), b"ok");
    }
}

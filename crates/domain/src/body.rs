//! Single-use body stream
//!
//! A request or response body is consumable exactly once, mirroring the
//! single-read semantics of a network stream. Validators that need the
//! bytes more than once must share a single read (see the body cache in
//! the validate crate).

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Read};

enum BodyInner {
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send>),
    Consumed,
}

/// A single-use request or response body.
///
/// The body is either already-materialized bytes or a readable source that
/// is drained on first use. After [`Body::read_to_end`] succeeds or fails,
/// the stream is consumed; further read attempts report an I/O error
/// rather than silently yielding empty content.
pub struct Body {
    inner: RefCell<BodyInner>,
}

impl Body {
    /// Creates an empty body.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Creates a body from materialized bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: RefCell::new(BodyInner::Bytes(bytes.into())),
        }
    }

    /// Creates a body that drains the given reader on first use.
    #[must_use]
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self {
            inner: RefCell::new(BodyInner::Reader(Box::new(reader))),
        }
    }

    /// Reads the body to completion, consuming the stream.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the source fails, or an error
    /// if the body has already been consumed.
    pub fn read_to_end(&self) -> io::Result<Vec<u8>> {
        let inner = std::mem::replace(&mut *self.inner.borrow_mut(), BodyInner::Consumed);
        match inner {
            BodyInner::Bytes(bytes) => Ok(bytes),
            BodyInner::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf)
            }
            BodyInner::Consumed => Err(io::Error::other("body already consumed")),
        }
    }

    /// Returns true if the body has already been read.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        matches!(&*self.inner.borrow(), BodyInner::Consumed)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner.borrow() {
            BodyInner::Bytes(bytes) => write!(f, "Body({} bytes)", bytes.len()),
            BodyInner::Reader(_) => write!(f, "Body(reader)"),
            BodyInner::Consumed => write!(f, "Body(consumed)"),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_bytes() {
        let body = Body::from("hello");
        assert_eq!(body.read_to_end().unwrap(), b"hello");
    }

    #[test]
    fn test_second_read_fails() {
        let body = Body::from("hello");
        body.read_to_end().unwrap();
        assert!(body.is_consumed());

        let err = body.read_to_end().unwrap_err();
        assert_eq!(err.to_string(), "body already consumed");
    }

    #[test]
    fn test_read_from_reader() {
        let body = Body::from_reader(io::Cursor::new(b"streamed".to_vec()));
        assert_eq!(body.read_to_end().unwrap(), b"streamed");
    }

    #[test]
    fn test_reader_error_propagates() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("connection reset"))
            }
        }

        let body = Body::from_reader(Broken);
        let err = body.read_to_end().unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
        assert!(body.is_consumed());
    }

    #[test]
    fn test_empty_body() {
        let body = Body::empty();
        assert_eq!(body.read_to_end().unwrap(), Vec::<u8>::new());
    }
}

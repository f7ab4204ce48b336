//! Header multimap with canonical key handling
//!
//! Header names are converted to their conventional HTTP form on insertion
//! (`content-type` becomes `Content-Type`), so lookups are case-insensitive
//! as long as both sides go through [`canonical_key`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Converts a header name to its canonical HTTP form.
///
/// Each hyphen-delimited segment is title-cased: the first byte is
/// upper-cased and the rest are lower-cased (`content-type` becomes
/// `Content-Type`). Names containing bytes that are not valid header
/// token characters are returned unchanged.
#[must_use]
pub fn canonical_key(name: &str) -> String {
    if name.is_empty() || !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for b in name.bytes() {
        let b = if upper {
            b.to_ascii_uppercase()
        } else {
            b.to_ascii_lowercase()
        };
        out.push(char::from(b));
        upper = b == b'-';
    }
    out
}

/// Valid header field-name bytes per RFC 7230 (token characters).
const fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

/// An ordered multimap of HTTP headers.
///
/// Keys are stored in canonical form; each key maps to the ordered list of
/// values it was given. Insertion order of keys is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    entries: IndexMap<String, Vec<String>>,
}

impl Headers {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under the given header name.
    ///
    /// The name is converted to canonical form; existing values under the
    /// same canonical name are kept.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(canonical_key(name))
            .or_default()
            .push(value.into());
    }

    /// Sets the header to a single value, replacing any existing values.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .insert(canonical_key(name), vec![value.into()]);
    }

    /// Returns the first value for the header, looked up by canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values(name)?.first().map(String::as_str)
    }

    /// Returns all values for the header, looked up by canonical name.
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.values_exact(&canonical_key(name))
    }

    /// Returns all values for the exact key, with no canonicalization.
    ///
    /// This is the lookup used by validators that inject their own key
    /// function; they canonicalize first and then call this.
    #[must_use]
    pub fn values_exact(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns true if the header is present, looked up by canonical name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values(name).is_some()
    }

    /// Returns the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.append(name.as_ref(), value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("content-type"), "Content-Type");
        assert_eq!(canonical_key("CONTENT-TYPE"), "Content-Type");
        assert_eq!(canonical_key("authorization"), "Authorization");
        assert_eq!(canonical_key("x-request-id"), "X-Request-Id");
    }

    #[test]
    fn test_canonical_key_invalid_bytes_unchanged() {
        assert_eq!(canonical_key("content type"), "content type");
        assert_eq!(canonical_key("sp{am}"), "sp{am}");
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn test_append_canonicalizes() {
        let mut headers = Headers::new();
        headers.append("content-type", "application/json");
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_append_keeps_all_values() {
        let mut headers = Headers::new();
        headers.append("Accept", "text/html");
        headers.append("accept", "application/json");
        assert_eq!(
            headers.values("Accept"),
            Some(&["text/html".to_string(), "application/json".to_string()][..])
        );
    }

    #[test]
    fn test_set_replaces_values() {
        let mut headers = Headers::new();
        headers.append("Accept", "text/html");
        headers.set("accept", "application/json");
        assert_eq!(
            headers.values("Accept"),
            Some(&["application/json".to_string()][..])
        );
    }

    #[test]
    fn test_values_exact_skips_canonicalization() {
        let mut headers = Headers::new();
        headers.append("Content-Type", "application/json");
        assert!(headers.values_exact("Content-Type").is_some());
        assert!(headers.values_exact("content-type").is_none());
    }

    #[test]
    fn test_from_iter() {
        let headers: Headers = [("content-type", "application/json"), ("host", "example.com")]
            .into_iter()
            .collect();
        assert_eq!(headers.len(), 2);
        assert!(headers.contains("Host"));
    }
}

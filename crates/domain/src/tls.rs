//! TLS connection snapshot types

use std::fmt;

use serde::{Deserialize, Serialize};

/// TLS protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TlsVersion {
    /// TLS 1.0 (deprecated, avoid if possible)
    #[serde(rename = "1.0")]
    Tls10,
    /// TLS 1.1 (deprecated, avoid if possible)
    #[serde(rename = "1.1")]
    Tls11,
    /// TLS 1.2 (recommended minimum)
    #[serde(rename = "1.2")]
    #[default]
    Tls12,
    /// TLS 1.3 (most secure)
    #[serde(rename = "1.3")]
    Tls13,
}

impl TlsVersion {
    /// Returns the version as its dotted string form (e.g. `"1.2"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tls10 => "1.0",
            Self::Tls11 => "1.1",
            Self::Tls12 => "1.2",
            Self::Tls13 => "1.3",
        }
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of a negotiated TLS connection.
///
/// Attached to a request or response snapshot when the exchange happened
/// over TLS; absent otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsSummary {
    /// Negotiated protocol version.
    pub version: TlsVersion,
}

impl TlsSummary {
    /// Creates a summary for the given negotiated version.
    #[must_use]
    pub const fn new(version: TlsVersion) -> Self {
        Self { version }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tls_version_display() {
        assert_eq!(TlsVersion::Tls12.to_string(), "1.2");
        assert_eq!(TlsVersion::Tls13.as_str(), "1.3");
    }

    #[test]
    fn test_tls_version_default() {
        assert_eq!(TlsVersion::default(), TlsVersion::Tls12);
    }
}

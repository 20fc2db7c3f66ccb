//! Listing fetch error type.

use std::fmt;

/// Error from a single listing-page GET (transport failure or non-2xx status).
/// One attempt per call; the core never retries.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP response had a non-2xx status.
    Http { url: String, status: u32 },
    /// Curl reported a transport error (timeout, DNS, connection, ...).
    Network { url: String, source: curl::Error },
}

impl FetchError {
    pub(crate) fn http(url: &str, status: u32) -> Self {
        FetchError::Http {
            url: url.to_string(),
            status,
        }
    }

    pub(crate) fn network(url: &str, source: curl::Error) -> Self {
        FetchError::Network {
            url: url.to_string(),
            source,
        }
    }

    /// True if the underlying transport failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network { source, .. } if source.is_operation_timedout())
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http { url, status } => {
                write!(f, "GET {} returned HTTP {}", url, status)
            }
            FetchError::Network { url, source } if source.is_operation_timedout() => {
                write!(f, "GET {} timed out: {}", url, source)
            }
            FetchError::Network { url, source } => {
                write!(f, "GET {} failed: {}", url, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network { source, .. } => Some(source),
            FetchError::Http { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_names_url_and_status() {
        let err = FetchError::http("https://dn.odroid.com/C4/", 404);
        let msg = err.to_string();
        assert!(msg.contains("https://dn.odroid.com/C4/"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn http_error_is_not_timeout_and_has_no_source() {
        use std::error::Error;
        let err = FetchError::http("https://example.com/", 500);
        assert!(!err.is_timeout());
        assert!(err.source().is_none());
    }
}

// --- File: crates/calbridge_common/src/http/client.rs ---
use reqwest::{header::HeaderMap, Client, Error as ReqwestError};
use std::time::Duration;

/// Creates a new HTTP client for talking to one upstream API.
///
/// # Arguments
///
/// * `timeout` - Applied to every request sent through the client
/// * `default_headers` - Headers sent with every request (auth, content type)
///
/// # Returns
///
/// A new reqwest::Client instance with the specified configuration
pub fn create_client(timeout: Duration, default_headers: HeaderMap) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(timeout)
        .default_headers(default_headers)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_create_client_with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(create_client(Duration::from_secs(5), headers).is_ok());
    }
}

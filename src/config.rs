//! Support for library configuration options

use std::sync::{Arc, Mutex, PoisonError};
use once_cell::sync::Lazy;

/// Where the backend is expected to listen, unless configured otherwise
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// The environment variable that overrides [`DEFAULT_API_URL`]
pub const API_URL_ENV_VAR: &str = "TODO_CALENDAR_API_URL";

/// The base URL of the backend, used by [`Client::from_config`](crate::client::Client::from_config).
/// Feel free to override it when initing this library.
pub static API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| {
    let url = std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    Arc::new(Mutex::new(url))
});

/// The currently configured base URL
pub fn api_url() -> String {
    API_URL.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Override the base URL for the rest of the process
pub fn set_api_url<S: ToString>(url: S) {
    *API_URL.lock().unwrap_or_else(PoisonError::into_inner) = url.to_string();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_override() {
        set_api_url("http://todo.example.com:9000");
        assert_eq!(api_url(), "http://todo.example.com:9000");
    }
}

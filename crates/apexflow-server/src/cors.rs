//! CORS policy.
//!
//! Requests without an `Origin` header pass untouched. Development accepts
//! any local origin; otherwise only the configured allow-list is echoed.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::ServerConfig;

const LOCAL_PREFIXES: [&str; 2] = ["http://localhost:", "http://127.0.0.1:"];

/// Whether `origin` may call the API under `config`.
pub fn origin_allowed(origin: &str, config: &ServerConfig) -> bool {
    if !config.is_production() && LOCAL_PREFIXES.iter().any(|p| origin.starts_with(p)) {
        return true;
    }
    config.allowed_origins.iter().any(|o| o == origin)
}

/// Build the CORS layer for `config`.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let config = Arc::new(config.clone());

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            let Ok(origin) = origin.to_str() else {
                return false;
            };
            let allowed = origin_allowed(origin, &config);
            if !allowed {
                warn!(origin, "CORS blocked origin");
            }
            allowed
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_development_allows_any_local_port() {
        let config = ServerConfig::default();
        assert!(origin_allowed("http://localhost:4321", &config));
        assert!(origin_allowed("http://127.0.0.1:8080", &config));
        assert!(!origin_allowed("http://evil.example", &config));
    }

    #[test]
    fn test_production_uses_allow_list() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(origin_allowed("https://apexflowagent.com", &config));
        assert!(origin_allowed("http://localhost:5173", &config));
        assert!(!origin_allowed("http://localhost:4321", &config));
        assert!(!origin_allowed("https://apexflowagent.com.evil.example", &config));
    }
}

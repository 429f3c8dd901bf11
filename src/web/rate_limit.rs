// File: src/web/rate_limit.rs
// Rate limiting middleware for API protection
// Token bucket per client IP with window-based refill

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::HeaderValue, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use dashmap::DashMap;
use std::net::SocketAddr;
use tracing::debug;

use crate::config::RateLimitSettings;
use crate::types::ErrorResponse;
use crate::web::AppState;

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_duration: Duration,
    pub enabled: bool,
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            max_requests: settings.max_requests,
            window_duration: Duration::from_secs(settings.window_seconds),
            enabled: settings.enabled,
        }
    }
}

struct TokenBucket {
    tokens: u32,
    last_refill: Instant,
    max_tokens: u32,
    refill_interval: Duration,
}

impl TokenBucket {
    fn new(max_tokens: u32, refill_interval: Duration) -> Self {
        Self {
            tokens: max_tokens,
            last_refill: Instant::now(),
            max_tokens,
            refill_interval,
        }
    }

    fn try_consume(&mut self) -> bool {
        self.refill();
        if self.tokens > 0 {
            self.tokens -= 1;
            true
        } else {
            false
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_refill) >= self.refill_interval {
            self.tokens = self.max_tokens;
            self.last_refill = now;
        }
    }

    fn remaining(&self) -> u32 {
        self.tokens
    }
}

/// Shared limiter state, one bucket per client key.
pub struct RateLimiter {
    buckets: DashMap<String, TokenBucket>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Returns (allowed, remaining tokens) for the given client key.
    pub fn check(&self, key: &str) -> (bool, u32) {
        if !self.config.enabled {
            return (true, self.config.max_requests);
        }

        let mut bucket = self.buckets.entry(key.to_string()).or_insert_with(|| {
            TokenBucket::new(self.config.max_requests, self.config.window_duration)
        });

        let allowed = bucket.try_consume();
        (allowed, bucket.remaining())
    }

    /// Drop buckets idle for more than two windows.
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.buckets.retain(|_, bucket| {
            now.duration_since(bucket.last_refill) < self.config.window_duration * 2
        });
    }
}

/// Background task that periodically evicts stale buckets.
pub fn start_cleanup_task(limiter: Arc<RateLimiter>) -> tokio::task::JoinHandle<()> {
    let period = limiter.config.window_duration.max(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            limiter.cleanup();
            debug!("Rate limiter cleanup completed");
        }
    })
}

/// axum middleware enforcing the per-client quota before handlers run.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let key = client_key(request.headers(), request.extensions().get::<ConnectInfo<SocketAddr>>());
    let (allowed, remaining) = state.rate_limiter.check(&key);
    let config = state.rate_limiter.config();

    if !allowed {
        let retry_after = config.window_duration.as_secs();
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(
                "Too many requests. Please try again later.".to_string(),
            )),
        )
            .into_response();
        set_limit_headers(response.headers_mut(), config.max_requests, 0);
        if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
            response.headers_mut().insert("retry-after", value);
        }
        return response;
    }

    let mut response = next.run(request).await;
    set_limit_headers(response.headers_mut(), config.max_requests, remaining);
    response
}

fn set_limit_headers(headers: &mut HeaderMap, limit: u32, remaining: u32) {
    if let Ok(value) = HeaderValue::from_str(&limit.to_string()) {
        headers.insert("x-ratelimit-limit", value);
    }
    if let Ok(value) = HeaderValue::from_str(&remaining.to_string()) {
        headers.insert("x-ratelimit-remaining", value);
    }
}

/// Client key for bucketing: first X-Forwarded-For hop when present
/// (the agent commonly runs behind a platform proxy), else the peer address.
fn client_key(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    match peer {
        Some(ConnectInfo(addr)) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_bucket_exhausts_and_denies() {
        let mut bucket = TokenBucket::new(5, Duration::from_secs(60));

        for _ in 0..5 {
            assert!(bucket.try_consume());
        }
        assert!(!bucket.try_consume());
    }

    #[test]
    fn limiter_denies_after_max_requests() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 3,
            window_duration: Duration::from_secs(60),
            enabled: true,
        });

        for _ in 0..3 {
            let (allowed, _) = limiter.check("test-ip");
            assert!(allowed);
        }
        let (allowed, remaining) = limiter.check("test-ip");
        assert!(!allowed);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn clients_are_bucketed_independently() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_secs(60),
            enabled: true,
        });

        assert!(limiter.check("1.1.1.1").0);
        assert!(!limiter.check("1.1.1.1").0);
        assert!(limiter.check("2.2.2.2").0);
    }

    #[test]
    fn disabled_limiter_allows_everything() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_secs(60),
            enabled: false,
        });

        for _ in 0..10 {
            assert!(limiter.check("test-ip").0);
        }
    }

    #[test]
    fn forwarded_header_wins_over_peer_address() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("9.9.9.9, 10.0.0.1"));
        let peer = ConnectInfo("127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(client_key(&headers, Some(&peer)), "9.9.9.9");
        assert_eq!(client_key(&HeaderMap::new(), Some(&peer)), "127.0.0.1");
        assert_eq!(client_key(&HeaderMap::new(), None), "unknown");
    }
}

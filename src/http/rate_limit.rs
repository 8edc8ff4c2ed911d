use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::http::ApiError;

/// Sliding-window limiter keyed by client address. Defaults follow the
/// direct-mail path policy: 10 requests per 15 minutes.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<HashMap<String, Vec<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Records the request and reports whether it fits inside the window.
    pub async fn check(&self, ip: &str) -> bool {
        let mut requests = self.requests.lock().await;
        let now = Instant::now();

        let ip_requests = requests.entry(ip.to_string()).or_insert_with(Vec::new);
        ip_requests.retain(|&req_time| now.duration_since(req_time) < self.window);

        if ip_requests.len() >= self.max_requests {
            return false;
        }

        ip_requests.push(now);
        true
    }

    /// Drops addresses with no requests left inside the window.
    pub async fn cleanup(&self) {
        let mut requests = self.requests.lock().await;
        let now = Instant::now();

        requests.retain(|_, times| {
            times.retain(|&time| now.duration_since(time) < self.window);
            !times.is_empty()
        });
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ip = client_ip(&req);

    if !limiter.check(&ip).await {
        tracing::warn!("🚦 Rate limit alcanzado para {}", ip);
        return Err(ApiError::RateLimited);
    }

    Ok(next.run(req).await)
}

fn client_ip(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

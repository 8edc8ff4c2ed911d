use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::http::rate_limit::RateLimiter;
use crate::services::NotificationDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<dyn NotificationDispatcher>,
    pub rate_limiter: RateLimiter,
    pub start_time: SystemTime,
}

pub mod errors;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use models::*;
pub use rate_limit::RateLimiter;
pub use routes::create_router;
pub use state::AppState;

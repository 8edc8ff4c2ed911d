pub mod config;
pub mod http;
pub mod pricing;
pub mod services;
pub mod session;
pub mod utils;
pub mod validation;

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_addr: String,
    pub log_level: String,

    // SMTP
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub email_from: String,
    pub recipient_email: Option<String>,

    // Rate limit (direct-mail path)
    pub rate_limit_max: usize,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            http_addr: env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:5001".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            smtp_host: env::var("SMTP_HOST").ok().filter(|s| !s.is_empty()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(587),
            smtp_user: env::var("SMTP_USER").ok().filter(|s| !s.is_empty()),
            smtp_pass: env::var("SMTP_PASS").ok().filter(|s| !s.is_empty()),
            email_from: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "noreply@cotizador-iso27001.mx".to_string()),
            recipient_email: env::var("RECIPIENT_EMAIL").ok().filter(|s| !s.is_empty()),

            rate_limit_max: env::var("RATE_LIMIT_MAX")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(15 * 60),
        })
    }

    pub fn smtp_configured(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_user.is_some() && self.smtp_pass.is_some()
    }

    /// Sales inbox; falls back to the authenticated SMTP user.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient_email
            .as_deref()
            .or(self.smtp_user.as_deref())
    }
}

use cotizador_server::config::Config;
use cotizador_server::http::{create_router, AppState, RateLimiter};
use cotizador_server::services::build_dispatcher;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    match dotenvy::dotenv() {
        Ok(path) => eprintln!("✅ .env cargado desde: {:?}", path),
        Err(e) => eprintln!("⚠️  .env no encontrado: {}", e),
    }

    // Logging setup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotizador_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Cotizador ISO 27001 iniciando...");

    let config = Arc::new(Config::from_env()?);
    tracing::info!("✅ Config cargada");
    tracing::info!("   HTTP Addr: {}", config.http_addr);
    tracing::info!("   SMTP configurado: {}", config.smtp_configured());
    tracing::info!(
        "   Rate limit: {} solicitudes / {}s",
        config.rate_limit_max,
        config.rate_limit_window_secs
    );

    let dispatcher = build_dispatcher(&config)?;

    let rate_limiter = RateLimiter::new(
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_secs),
    );

    // Purge stale rate-limit entries in the background
    let cleanup_limiter = rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            cleanup_limiter.cleanup().await;
        }
    });

    let state = AppState {
        config: config.clone(),
        dispatcher,
        rate_limiter,
        start_time: SystemTime::now(),
    };

    // Preflight requests are answered by the CORS layer with no body
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!("🌐 Server escuchando: http://{}", config.http_addr);
    tracing::info!("📋 Endpoints:");
    tracing::info!("   GET  /api/health");
    tracing::info!("   POST /api/submit-quote");
    tracing::info!("   POST /api/send-quote");

    axum::serve(listener, app).await?;

    Ok(())
}

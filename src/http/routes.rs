use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::time::SystemTime;

use crate::http::rate_limit::rate_limit_middleware;
use crate::http::{
    ApiError, AppState, HealthResponse, QuoteNotification, SendQuoteRequest, SubmitResponse,
};
use crate::session::FormSession;
use crate::utils::mask::mask_sensitive;
use crate::validation;

pub fn create_router(state: AppState) -> Router {
    // The direct-mail path carries its own rate limit; the dispatcher
    // boundary does not.
    let direct_mail = Router::new()
        .route("/api/send-quote", post(send_quote_handler))
        .layer(middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/submit-quote", post(submit_quote_handler))
        .merge(direct_mail)
        .fallback(not_found_handler)
        .with_state(state)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = SystemTime::now()
        .duration_since(state.start_time)
        .unwrap_or_default()
        .as_secs();

    let response = HealthResponse {
        ok: true,
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

/// Dispatcher boundary: accepts the label payload, re-validates the contact
/// and hands the submission to the mail collaborator.
async fn submit_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteNotification>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(notification) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    tracing::info!(
        "📥 Solicitud de cotización: {} ({})",
        notification.name,
        mask_sensitive(&notification.email)
    );

    validation::validate_contact(&notification.contact())?;

    state.dispatcher.dispatch(&notification).await?;

    Ok((
        StatusCode::OK,
        Json(SubmitResponse {
            success: true,
            message: Some("Quote processed successfully".to_string()),
        }),
    ))
}

/// Direct-to-mail path: raw profile in, estimate recomputed server-side with
/// the same rules the interactive form uses.
async fn send_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<SendQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let session = FormSession {
        profile: request.profile,
        contact: request.contact,
    };
    let submission = session.submission()?;

    tracing::info!(
        "📥 Cotización directa: id={} rango={}-{} MXN",
        submission.id,
        submission.estimate.price_min,
        submission.estimate.price_max
    );

    let notification = QuoteNotification::from(&submission);
    state.dispatcher.dispatch(&notification).await?;

    Ok((
        StatusCode::OK,
        Json(SubmitResponse {
            success: true,
            message: None,
        }),
    ))
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}

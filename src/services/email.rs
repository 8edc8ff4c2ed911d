use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use crate::config::Config;
use crate::http::{ApiError, QuoteNotification};
use crate::utils::mask::mask_sensitive;

/// Delivers one validated submission to the sales team. Fire-and-forget: no
/// retry, no idempotency key, no ordering between submissions.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(&self, notification: &QuoteNotification) -> Result<(), ApiError>;
}

/// SMTP dispatcher when credentials are present, log-only fallback otherwise
/// so the rest of the flow keeps working in development.
pub fn build_dispatcher(
    config: &Config,
) -> Result<Arc<dyn NotificationDispatcher>, Box<dyn std::error::Error>> {
    if config.smtp_configured() {
        let dispatcher = SmtpDispatcher::new(config)?;
        tracing::info!("✅ Servicio de email listo");
        Ok(Arc::new(dispatcher))
    } else {
        tracing::warn!("📧 SMTP sin configurar, las cotizaciones solo se registran en el log");
        Ok(Arc::new(LogDispatcher))
    }
}

pub struct SmtpDispatcher {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipient: Mailbox,
}

impl SmtpDispatcher {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let host = config.smtp_host.as_deref().ok_or("SMTP_HOST requerido")?;
        let user = config.smtp_user.clone().ok_or("SMTP_USER requerido")?;
        let pass = config.smtp_pass.clone().ok_or("SMTP_PASS requerido")?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(user, pass))
            .build();

        let from: Mailbox = config.email_from.parse()?;
        let recipient: Mailbox = config
            .recipient()
            .ok_or("RECIPIENT_EMAIL requerido")?
            .parse()?;

        Ok(Self {
            transport,
            from,
            recipient,
        })
    }
}

#[async_trait]
impl NotificationDispatcher for SmtpDispatcher {
    async fn dispatch(&self, notification: &QuoteNotification) -> Result<(), ApiError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.recipient.clone())
            .subject(format!(
                "Nueva Cotización ISO 27001 - {}",
                notification.name
            ))
            .header(ContentType::TEXT_HTML)
            .body(render_quote_email(notification))
            .map_err(|e| {
                tracing::error!("❌ No se pudo construir el email: {}", e);
                ApiError::Dispatch
            })?;

        self.transport.send(message).await.map_err(|e| {
            tracing::error!("❌ Envío SMTP falló: {}", e);
            ApiError::Dispatch
        })?;

        tracing::info!(
            "📧 Cotización enviada: {} ({})",
            notification.name,
            mask_sensitive(&notification.email)
        );

        Ok(())
    }
}

/// Fallback when SMTP is unconfigured: logs the submission and reports
/// success so the flow can still be exercised end to end.
pub struct LogDispatcher;

#[async_trait]
impl NotificationDispatcher for LogDispatcher {
    async fn dispatch(&self, notification: &QuoteNotification) -> Result<(), ApiError> {
        tracing::info!(
            "📧 [MOCK] Cotización: {} ({} / {}) - {} - {} a {}",
            notification.name,
            mask_sensitive(&notification.email),
            mask_sensitive(&notification.phone),
            notification.sector_label,
            format_mxn(notification.price_min),
            format_mxn(notification.price_max),
        );
        Ok(())
    }
}

/// es-MX currency rendering without decimals, e.g. `$123,500`.
pub fn format_mxn(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

fn render_quote_email(n: &QuoteNotification) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Cotización ISO 27001</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1>Nueva solicitud de cotización ISO 27001</h1>

  <h2>Datos del cliente</h2>
  <p><strong>Nombre:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>WhatsApp:</strong> {phone}</p>

  <h2>Información de la empresa</h2>
  <p><strong>Número de empleados:</strong> {employees}</p>
  <p><strong>Número de sitios:</strong> {sites}</p>
  <p><strong>Sector de actividad:</strong> {sector}</p>
  <p><strong>Sistema de gestión actual:</strong> {management}</p>
  <p><strong>Urgencia del proyecto:</strong> {urgency}</p>

  <h2>Cotización estimada</h2>
  <p><strong>{price_min} - {price_max}</strong></p>
  <p>*Precio estimado basado en la información proporcionada</p>

  <p style="color: #666; margin-top: 30px;">Este email fue generado automáticamente desde la calculadora de certificación.</p>
</body>
</html>"#,
        name = n.name,
        email = n.email,
        phone = n.phone,
        employees = n.employee_band_label,
        sites = n.site_count,
        sector = n.sector_label,
        management = n.management_label,
        urgency = n.urgency_label,
        price_min = format_mxn(n.price_min),
        price_max = format_mxn(n.price_max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> QuoteNotification {
        QuoteNotification {
            name: "Ana Torres".to_string(),
            email: "ana@acmecorp.com".to_string(),
            phone: "5512345678".to_string(),
            employee_band_label: "11 a 25 personas".to_string(),
            site_count: 2,
            sector_label: "Tecnología / Desarrollo de Software".to_string(),
            management_label: "No".to_string(),
            urgency_label: "6 meses (tiempo promedio)".to_string(),
            price_min: 136_500,
            price_max: 150_150,
        }
    }

    #[test]
    fn test_format_mxn_groups_thousands() {
        assert_eq!(format_mxn(0), "$0");
        assert_eq!(format_mxn(950), "$950");
        assert_eq!(format_mxn(13_000), "$13,000");
        assert_eq!(format_mxn(123_500), "$123,500");
        assert_eq!(format_mxn(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_template_contains_submission_fields() {
        let html = render_quote_email(&notification());
        assert!(html.contains("Ana Torres"));
        assert!(html.contains("ana@acmecorp.com"));
        assert!(html.contains("11 a 25 personas"));
        assert!(html.contains("$136,500 - $150,150"));
    }

    #[tokio::test]
    async fn test_log_dispatcher_always_succeeds() {
        let result = LogDispatcher.dispatch(&notification()).await;
        assert!(result.is_ok());
    }
}

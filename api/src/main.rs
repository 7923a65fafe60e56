use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_api::telemetry::init_tracing;
use otp_core::services::otp::{OtpService, OtpServiceConfig};
use otp_infra::{
    create_email_sender, create_sms_sender, EmailSenderAdapter, MessageTemplate, SmsSenderAdapter,
};
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (reads .env when present)
    let config = AppConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.logging).context("failed to install tracing subscriber")?;

    tracing::info!(
        environment = %config.environment,
        "Starting OTP service"
    );

    // Delivery providers
    let template = MessageTemplate::from(&config.otp);
    let email_sender = EmailSenderAdapter::new(
        create_email_sender(&config.delivery.email),
        template.clone(),
    );
    let sms_sender = SmsSenderAdapter::new(create_sms_sender(&config.delivery.sms), template);

    let otp_service = Arc::new(OtpService::new(
        Arc::new(email_sender),
        Arc::new(sms_sender),
        OtpServiceConfig::from(&config.otp),
    ));

    // Background expiry sweeper, stopped after the server exits
    let shutdown = CancellationToken::new();
    let sweeper = otp_service.sweeper().spawn(shutdown.clone());

    let app_state = web::Data::new(AppState::new(otp_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()).wrap(Logger::default()))
        .shutdown_timeout(config.server.shutdown_timeout);
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await;

    shutdown.cancel();
    if tokio::time::timeout(Duration::from_secs(5), sweeper).await.is_err() {
        tracing::warn!("Expiry sweeper did not stop in time");
    }

    tracing::info!("OTP service stopped");
    result.context("server error")
}

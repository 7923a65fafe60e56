//! Application factory
//!
//! Builds the actix-web application around an [`AppState`].

use actix_web::{
    body::BoxBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};

use otp_core::services::otp::OtpSenderTrait;
use otp_shared::{error_codes, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::routes::otp::{send_code::send_code, verify_code::verify_code, AppState};

/// Create and configure the application with all dependencies
///
/// Middleware such as the access logger is added by the caller.
pub fn create_app<E, S>(
    app_state: web::Data<AppState<E, S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    E: OtpSenderTrait + 'static,
    S: OtpSenderTrait + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Health check endpoint
        .route("/health", web::get().to(health_check::<E, S>))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/otp")
                    .route("/send", web::post().to(send_code::<E, S>))
                    .route("/verify", web::post().to(verify_code::<E, S>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<E, S>(state: web::Data<AppState<E, S>>) -> HttpResponse
where
    E: OtpSenderTrait + 'static,
    S: OtpSenderTrait + 'static,
{
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "active_otps": state.otp_service.store().len(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

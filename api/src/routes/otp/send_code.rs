use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use otp_core::services::otp::OtpSenderTrait;
use otp_core::DeliveryChannel;
use otp_shared::identifier::mask_identifier;
use otp_shared::{error_codes, ApiResponse, ErrorResponse};

use super::{request_id, AppState};
use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::{handle_domain_error, missing_input_response, validation_error_response};

/// Handler for POST /api/v1/otp/send
///
/// Issues a new code for the identifier and delivers it.
///
/// # Request Body
///
/// ```json
/// {
///     "identifier": "alice@example.com",
///     "channel": "email",
///     "display_name": "Alice"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "message": "OTP sent successfully",
///         "channel": "email",
///         "expires_in": 600
///     },
///     "timestamp": "2025-08-14T10:00:00Z",
///     "request_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 `MISSING_INPUT` / `VALIDATION_ERROR`
/// - 503 `DELIVERY_FAILED`
pub async fn send_code<E, S>(
    req: HttpRequest,
    state: web::Data<AppState<E, S>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    E: OtpSenderTrait + 'static,
    S: OtpSenderTrait + 'static,
{
    let request_id = request_id(&req);

    if request.identifier.trim().is_empty() {
        return missing_input_response("identifier");
    }

    if let Err(errors) = request.validate() {
        tracing::warn!(
            request_id = %request_id,
            "Validation failed for send_code request: {:?}",
            errors.field_errors().keys().collect::<Vec<_>>()
        );
        return validation_error_response(&errors);
    }

    let channel = match request.channel.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => match value.parse::<DeliveryChannel>() {
            Ok(channel) => Some(channel),
            Err(message) => {
                return HttpResponse::BadRequest()
                    .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message));
            }
        },
    };

    tracing::info!(
        request_id = %request_id,
        identifier = %mask_identifier(request.identifier.trim()),
        "Processing send_code request"
    );

    match state
        .otp_service
        .send_code(&request.identifier, channel, request.display_name.as_deref())
        .await
    {
        Ok(result) => {
            tracing::info!(
                request_id = %request_id,
                channel = %result.channel,
                message_id = %result.message_id,
                "OTP sent"
            );

            HttpResponse::Ok().json(
                ApiResponse::success(SendCodeResponse {
                    message: "OTP sent successfully".to_string(),
                    channel: result.channel.to_string(),
                    expires_in: result.expires_in.num_seconds(),
                })
                .with_request_id(request_id),
            )
        }
        Err(error) => {
            tracing::warn!(
                request_id = %request_id,
                error = %error,
                "Failed to send OTP"
            );
            handle_domain_error(&error)
        }
    }
}

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use otp_core::services::otp::OtpSenderTrait;
use otp_core::VerificationOutcome;
use otp_shared::ApiResponse;

use super::{request_id, AppState};
use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{
    handle_domain_error, handle_rejected_outcome, missing_input_response, validation_error_response,
};

/// Handler for POST /api/v1/otp/verify
///
/// # Request Body
///
/// ```json
/// {
///     "identifier": "alice@example.com",
///     "code": "482913"
/// }
/// ```
///
/// # Responses
/// - 200 verified
/// - 400 `OTP_INVALID` (with `remaining_attempts`) or `OTP_EXPIRED`
/// - 429 `OTP_LOCKED_OUT`
/// - 404 `OTP_NOT_FOUND`
pub async fn verify_code<E, S>(
    req: HttpRequest,
    state: web::Data<AppState<E, S>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    E: OtpSenderTrait + 'static,
    S: OtpSenderTrait + 'static,
{
    let request_id = request_id(&req);

    if request.identifier.trim().is_empty() {
        return missing_input_response("identifier");
    }
    if request.code.trim().is_empty() {
        return missing_input_response("code");
    }
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .otp_service
        .verify_code(&request.identifier, &request.code)
        .await
    {
        Ok(outcome) if outcome.is_success() => HttpResponse::Ok().json(
            ApiResponse::success(VerifyCodeResponse {
                message: VerificationOutcome::Success.message().to_string(),
                verified: true,
            })
            .with_request_id(request_id),
        ),
        Ok(outcome) => {
            tracing::debug!(
                request_id = %request_id,
                outcome = outcome.as_str(),
                retryable = !outcome.is_terminal(),
                "OTP verification rejected"
            );
            handle_rejected_outcome(outcome)
        }
        Err(error) => handle_domain_error(&error),
    }
}

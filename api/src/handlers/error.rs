//! Mapping of domain errors and verification outcomes to HTTP responses

use actix_web::{HttpResponse, ResponseError};
use actix_web::error::JsonPayloadError;
use actix_web::HttpRequest;
use validator::ValidationErrors;

use otp_core::{DomainError, VerificationOutcome};
use otp_shared::{error_codes, ErrorResponse};

/// Response for a required field that is absent or blank
pub fn missing_input_response(field: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(
            error_codes::MISSING_INPUT,
            format!("Missing required field: {}", field),
        )
        .add_detail("field", field),
    )
}

/// Response for DTO validation failures, listing the offending fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::MissingInput { field } => missing_input_response(field),
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())),
        DomainError::DeliveryFailure { channel, .. } => {
            // Provider detail stays in the logs
            HttpResponse::ServiceUnavailable().json(
                ErrorResponse::new(
                    error_codes::DELIVERY_FAILED,
                    format!("Failed to deliver OTP via {}. Please try again later", channel),
                )
                .add_detail("channel", channel),
            )
        }
    }
}

/// Response for a rejected verification
///
/// `Success` is rendered by the handler itself; passing it here yields 200.
pub fn handle_rejected_outcome(outcome: VerificationOutcome) -> HttpResponse {
    match outcome {
        VerificationOutcome::Mismatch { remaining_attempts } => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::OTP_INVALID, outcome.message())
                .add_detail("remaining_attempts", remaining_attempts),
        ),
        VerificationOutcome::Expired => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::OTP_EXPIRED, outcome.message())),
        VerificationOutcome::LockedOut => HttpResponse::TooManyRequests()
            .json(ErrorResponse::new(error_codes::OTP_LOCKED_OUT, outcome.message())),
        VerificationOutcome::NotFound => HttpResponse::NotFound()
            .json(ErrorResponse::new(error_codes::OTP_NOT_FOUND, outcome.message())),
        VerificationOutcome::Success => HttpResponse::Ok().finish(),
    }
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = error.to_string();
    let response = HttpResponse::build(error.status_code())
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, message));
    actix_web::error::InternalError::from_response(error, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use otp_core::DeliveryChannel;

    #[test]
    fn test_domain_error_status_codes() {
        assert_eq!(
            handle_domain_error(&DomainError::missing("identifier")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_domain_error(&DomainError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_domain_error(&DomainError::DeliveryFailure {
                channel: DeliveryChannel::Sms,
                message: "down".to_string(),
            })
            .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_outcome_status_codes() {
        assert_eq!(
            handle_rejected_outcome(VerificationOutcome::Mismatch { remaining_attempts: 1 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_rejected_outcome(VerificationOutcome::Expired).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_rejected_outcome(VerificationOutcome::LockedOut).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            handle_rejected_outcome(VerificationOutcome::NotFound).status(),
            StatusCode::NOT_FOUND
        );
    }
}

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FeedbackRequest, FeedbackResponse};
use crate::routes::{validation_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(send_feedback));
}

/// Forward user feedback by email
///
/// POST /api/v1/feedback
///
/// Request body:
/// ```json
/// { "message": "string" }
/// ```
///
/// Delivery failures return 502; the client may resubmit.
async fn send_feedback(
    state: web::Data<AppState>,
    req: web::Json<FeedbackRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors.to_string());
    }
    if req.message.trim().is_empty() {
        return validation_error("message must not be blank".to_string());
    }

    let feedback_id = uuid::Uuid::new_v4().to_string();

    if state.feedback.deliver(&req.message).await {
        tracing::info!("Feedback {} delivered", feedback_id);
        HttpResponse::Ok().json(FeedbackResponse {
            success: true,
            feedback_id,
        })
    } else {
        tracing::warn!("Feedback {} could not be delivered", feedback_id);
        HttpResponse::BadGateway().json(ErrorResponse {
            error: "Failed to send feedback".to_string(),
            message: "Please try again later".to_string(),
            status_code: 502,
        })
    }
}

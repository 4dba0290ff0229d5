// Route exports
pub mod compatibility;
pub mod feedback;

use actix_web::{web, HttpResponse};
use crate::core::{Scorer, ScoringError};
use crate::models::ErrorResponse;
use crate::services::FeedbackClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
    pub feedback: Arc<FeedbackClient>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(compatibility::configure)
            .configure(feedback::configure),
    );
}

pub(crate) fn validation_error(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

pub(crate) fn scoring_error(err: &ScoringError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: err.code().to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}

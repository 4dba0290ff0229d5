use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    HealthResponse, ProgressRequest, QuestionnaireRequest, QuestionsResponse, QuickEstimateRequest,
};
use crate::routes::{scoring_error, validation_error, AppState};

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/questions", web::get().to(list_questions))
        .route("/compatibility/quick", web::post().to(quick_estimate))
        .route("/compatibility/questionnaire", web::post().to(score_questionnaire))
        .route("/questionnaire/progress", web::post().to(questionnaire_progress));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/questions
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    let questions = state.scorer.bank().questions().to_vec();

    HttpResponse::Ok().json(QuestionsResponse {
        total: questions.len(),
        questions,
    })
}

/// Quick date-only estimate
///
/// POST /api/v1/compatibility/quick
///
/// Request body:
/// ```json
/// {
///   "dateA": "1990-05-17",
///   "dateB": "1992-11-02",
///   "features": { "isPremium": false }
/// }
/// ```
async fn quick_estimate(
    state: web::Data<AppState>,
    req: web::Json<QuickEstimateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for quick estimate: {:?}", errors);
        return validation_error(errors.to_string());
    }

    match state.scorer.quick_estimate(&req.date_a, &req.date_b, &req.features) {
        Ok(result) => {
            tracing::info!("Quick estimate: {}%", result.compatibility);
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            tracing::info!("Quick estimate rejected: {}", e);
            scoring_error(&e)
        }
    }
}

/// Score a completed questionnaire
///
/// POST /api/v1/compatibility/questionnaire
///
/// Request body:
/// ```json
/// {
///   "answers": { "1": "Slightly uneasy", "2": 4 },
///   "dateA": "1990-05-17",
///   "dateB": "1992-11-02",
///   "features": { "isPremium": true }
/// }
/// ```
///
/// Dates are optional but must be supplied together.
async fn score_questionnaire(
    state: web::Data<AppState>,
    req: web::Json<QuestionnaireRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for questionnaire: {:?}", errors);
        return validation_error(errors.to_string());
    }

    let outcome = match (&req.date_a, &req.date_b) {
        (Some(date_a), Some(date_b)) => {
            state
                .scorer
                .full_test(date_a, date_b, &req.answers, &req.features)
        }
        (None, None) => state
            .scorer
            .compute_result_with_features(&req.answers, &req.features),
        _ => {
            return validation_error("dateA and dateB must be provided together".to_string());
        }
    };

    match outcome {
        Ok(result) => {
            tracing::info!(
                "Questionnaire scored {}% ({} answers)",
                result.compatibility,
                req.answers.len()
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            tracing::info!("Questionnaire rejected: {}", e);
            scoring_error(&e)
        }
    }
}

/// POST /api/v1/questionnaire/progress
async fn questionnaire_progress(
    state: web::Data<AppState>,
    req: web::Json<ProgressRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(state.scorer.progress(&req.answers))
}

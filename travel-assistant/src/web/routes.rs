//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Shown instead of an answer when the question is blank.
const EMPTY_QUERY: &str = "Empty query";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page).post(ask_form))
        .route("/health", get(health))
        .route("/api/ask", post(ask_api))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the question form.
async fn index_page() -> Result<Html<String>, AppError> {
    render(&IndexTemplate::blank())
}

/// Answer a question submitted through the form.
async fn ask_form(
    State(state): State<AppState>,
    Form(req): Form<AskRequest>,
) -> Result<Html<String>, AppError> {
    let answer = match req.query() {
        Some(query) => state.assistant.run(query).await,
        None => EMPTY_QUERY.to_string(),
    };

    render(&IndexTemplate::answered(req.question.trim(), answer))
}

/// Answer a question as JSON.
async fn ask_api(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let query = req.query().ok_or_else(|| AppError::BadRequest {
        message: EMPTY_QUERY.to_string(),
    })?;

    let answer = state.assistant.answer(query).await;
    Ok(Json(answer.into()))
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

//! HTTP route handlers for Axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::{error, warn};

use crate::{
    api::types::{ReviewDto, ReviewRequest},
    pipeline::ReviewError,
    review::Review,
    ui,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;
type PageResult = Result<(StatusCode, Html<String>), (StatusCode, String)>;

pub async fn index() -> PageResult {
    render("", None, StatusCode::OK)
}

pub async fn review_form(
    State(state): State<AppState>,
    Form(request): Form<ReviewRequest>,
) -> PageResult {
    let outcome = state.pipeline.run(&request.topic).await;
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };
    render(&request.topic, Some(&outcome), status)
}

pub async fn review_json(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<ReviewDto> {
    state
        .pipeline
        .run(&request.topic)
        .await
        .map(|review| Json(review.into()))
        .map_err(|err| (status_for(&err), err.to_string()))
}

fn render(
    topic: &str,
    outcome: Option<&Result<Review, ReviewError>>,
    status: StatusCode,
) -> PageResult {
    ui::render_page(topic, outcome)
        .map(|body| (status, Html(body)))
        .map_err(|e| {
            error!(%e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

fn status_for(err: &ReviewError) -> StatusCode {
    match err {
        ReviewError::EmptyTopic => StatusCode::BAD_REQUEST,
        ReviewError::NoResultsFound => StatusCode::NOT_FOUND,
        ReviewError::FetchServiceFailure(_) | ReviewError::GenerationFailure { .. } => {
            warn!(%err, "review request failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

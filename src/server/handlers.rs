use super::types::{ErrorResponse, IndexResponse};
use crate::{classifier::Prediction, pipeline::ClassificationPipeline, store::ResultRecord, Error};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ClassificationPipeline>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        index: "classification app working".to_string(),
    })
}

pub async fn classify(
    State(state): State<AppState>,
    Path(message): Path<String>,
) -> Result<Json<Prediction>, HandlerError> {
    info!("Received classification request ({} chars)", message.len());

    match state.pipeline.classify(&message).await {
        Ok(prediction) => Ok(Json(prediction)),
        Err(e) => Err(failure("classification", e)),
    }
}

pub async fn read_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResultRecord>>, HandlerError> {
    match state.pipeline.results().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => Err(failure("results read", e)),
    }
}

/// Uniform failure mapping: the internal cause is logged, the client gets a
/// redacted detail string and a 500.
fn failure(operation: &str, e: Error) -> HandlerError {
    error!("{} failed: {}", operation, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.public_message().to_string(),
        }),
    )
}

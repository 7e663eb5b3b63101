use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tinylink_core::ShortCode;
use tracing::debug;
use url::Url;

pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected shorten request body");
        AppError::BadRequest("invalid json")
    })?;

    let code = state.shortener().shorten(&request.url).await?;

    Ok(Json(ShortenResponse {
        short_url: code.to_url(state.base_url()),
        code: code.to_string(),
    }))
}

pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = ShortCode::new(code);
    let original_url = state.shortener().resolve(&code).await?;

    let location = location_header(&original_url)?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, percent-encoding the URL if it is not a
/// valid header value as stored.
fn location_header(url: &str) -> Result<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    let encoded = Url::parse(url).map_err(|e| AppError::Internal(e.to_string()))?;
    HeaderValue::from_str(encoded.as_str()).map_err(|e| AppError::Internal(e.to_string()))
}

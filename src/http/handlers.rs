//! HTTP request handlers for the countries collection.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Value;
use tracing::debug;

use super::content_type::declares_json;
use super::error::ApiError;
use crate::clients::CountryClient;
use crate::model::{Country, CountryCreate};

/// Largest request body `add_country` buffers, matching axum's default body limit.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub countries: CountryClient,
}

impl AppState {
    pub fn new(countries: CountryClient) -> Self {
        Self { countries }
    }
}

/// `GET /countries`: the whole collection as a JSON array, in insertion order.
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Country>>, ApiError> {
    let countries = state.countries.list_countries().await?;
    Ok(Json(countries))
}

/// `POST /countries`: append the body as a new country and return it with its id.
///
/// The content type is checked before the body is read, so a non-JSON
/// request is refused with 415 whatever its size and never reaches the
/// collection. The body is then buffered up to [`MAX_BODY_BYTES`].
pub async fn add_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<(StatusCode, Json<Country>), ApiError> {
    if !declares_json(&headers) {
        return Err(ApiError::UnsupportedMediaType);
    }

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            debug!(error = %e, "Failed to buffer request body");
            ApiError::PayloadTooLarge
        })?;
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed JSON body: {}", e)))?;
    let payload = CountryCreate::try_from(value)?;
    debug!(?payload, "add_country called");

    let country = state.countries.add_country(payload).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

/// `GET /health`: liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

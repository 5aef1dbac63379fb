use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use inspira_palettes::{
    AssembledPalettes, PaletteDetails, PaletteError, PaletteService, TrendingPalettes,
    TrendingSource,
};
use serde::Deserialize;

type SharedService<S> = Arc<PaletteService<S>>;

pub fn router<S: TrendingSource + 'static>(service: SharedService<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/tags", get(list_tags::<S>))
        .route("/api/palettes", get(palettes_by_tag::<S>))
        .route("/api/palettes/trending", get(trending_palettes::<S>))
        .route("/api/palette/:id", get(palette_details::<S>))
        .fallback(not_found)
        .with_state(service)
        .layer(middleware::from_fn(cors))
}

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn list_tags<S: TrendingSource>(
    State(service): State<SharedService<S>>,
) -> Json<Vec<&'static str>> {
    Json(service.tags())
}

#[derive(Debug, Deserialize)]
struct PaletteQuery {
    tag: String,
    #[serde(default = "default_tag_count")]
    count: usize,
}

fn default_tag_count() -> usize {
    5
}

async fn palettes_by_tag<S: TrendingSource>(
    State(service): State<SharedService<S>>,
    query: Result<Query<PaletteQuery>, QueryRejection>,
) -> Result<Json<AssembledPalettes>, ApiError> {
    let Query(query) = query?;
    let result = service.assemble(&query.tag, query.count).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
struct TrendingQuery {
    #[serde(default = "default_trending_count")]
    count: usize,
}

fn default_trending_count() -> usize {
    10
}

async fn trending_palettes<S: TrendingSource>(
    State(service): State<SharedService<S>>,
    query: Result<Query<TrendingQuery>, QueryRejection>,
) -> Result<Json<TrendingPalettes>, ApiError> {
    let Query(query) = query?;
    let result = service.trending(query.count).await.map_err(|err| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching trending palettes: {err}"),
        )
    })?;
    Ok(Json(result))
}

async fn palette_details<S: TrendingSource>(
    State(service): State<SharedService<S>>,
    Path(id): Path<String>,
) -> Json<PaletteDetails> {
    Json(service.palette_details(&id))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Answers every preflight and stamps permissive CORS headers on all responses.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        (StatusCode::OK, Json(serde_json::json!({}))).into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    response
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<PaletteError> for ApiError {
    fn from(value: PaletteError) -> Self {
        match value {
            PaletteError::UnknownTag(_) => Self::not_found(value.to_string()),
            other => Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.message,
        }));
        (self.status, body).into_response()
    }
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::RequestId;
use crate::models::{RecommendationRequest, RecommendationResponse};
use crate::services::get_recommendations;
use crate::web::Page;

use super::AppState;

const DEFAULT_TITLE_LIMIT: usize = 100;
const MAX_TITLE_LIMIT: usize = 1000;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct TitlesQuery {
    #[serde(default)]
    pub offset: usize,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub total: usize,
    pub offset: usize,
    pub titles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub slug: &'static str,
    pub label: &'static str,
    pub path: String,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            slug: page.slug(),
            label: page.label(),
            path: page.path(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Page of the ordered title list
pub async fn get_titles(
    State(state): State<AppState>,
    Query(params): Query<TitlesQuery>,
) -> Json<TitlesResponse> {
    let all = state.catalog.titles();
    let limit = params
        .limit
        .unwrap_or(DEFAULT_TITLE_LIMIT)
        .min(MAX_TITLE_LIMIT);
    let start = params.offset.min(all.len());
    let end = start.saturating_add(limit).min(all.len());

    Json(TitlesResponse {
        total: all.len(),
        offset: start,
        titles: all[start..end].to_vec(),
    })
}

/// Menu pages in display order
pub async fn get_pages() -> Json<Vec<PageResponse>> {
    Json(Page::ALL.into_iter().map(PageResponse::from).collect())
}

/// Runs the selected recommender on three favourite titles
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let top_n = request.top_n.unwrap_or(state.top_n);

    tracing::info!(
        request_id = %request_id,
        algorithm = %request.algorithm,
        top_n,
        "Processing recommendation request"
    );

    let titles = get_recommendations(
        state.recommender(request.algorithm),
        request.movie_list,
        top_n,
    )
    .await?;

    Ok(Json(RecommendationResponse::new(request.algorithm, titles)))
}

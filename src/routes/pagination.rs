//! Pagination preview route: page state and navigation links for given counts.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::requested_page::RequestedPage;
use crate::models::display::DisplayData;
use crate::models::pagination::PageState;
use crate::services::links;
use crate::AppState;

/// Query parameters besides `page`, which goes through [`RequestedPage`].
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewParams {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub path: String,
    pub visible: Option<i64>,
}

/// Page state plus the links a template would render.
#[derive(Debug, Serialize)]
pub struct PaginationView {
    pub total: i64,
    pub limit: i64,
    pub pages: i64,
    pub current: i64,
    pub offset: i64,
    pub has_pages: bool,
    pub query: String,
    pub display: DisplayData,
}

impl PaginationView {
    pub fn new(state: &PageState, visible: i64) -> Self {
        Self {
            total: state.total(),
            limit: state.limit(),
            pages: state.pages(),
            current: state.current(),
            offset: state.offset(),
            has_pages: state.has_pages(),
            query: state.query_fragment(),
            display: links::display_data(state, visible),
        }
    }
}

/// GET /api/v1/pagination — compute pagination for `total` items in pages of `limit`.
pub async fn preview(
    State(state): State<AppState>,
    RequestedPage(page): RequestedPage,
    params: Result<Query<PreviewParams>, QueryRejection>,
) -> Result<Json<ApiResponse<PaginationView>>, AppError> {
    let Query(params) = params?;

    let max_visible = state.config.max_visible;
    let visible = params.visible.unwrap_or(state.config.visible);
    if !(1..=max_visible).contains(&visible) {
        return Err(AppError::Validation(format!(
            "visible must be between 1 and {max_visible}"
        )));
    }

    let pagination = PageState::new(params.total, params.limit, page).with_path(params.path);
    tracing::debug!(
        total = pagination.total(),
        pages = pagination.pages(),
        current = pagination.current(),
        "Pagination preview"
    );

    Ok(ApiResponse::success(PaginationView::new(&pagination, visible)))
}

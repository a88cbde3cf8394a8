use crate::error::ServiceError;
use crate::models::book::BookViewModel;
use crate::routes::AppState;
use crate::services::catalog::search_catalog;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

pub async fn search_books(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookViewModel>>, ServiceError> {
    let query = params.query.unwrap_or_default();
    info!("Search query: '{}'", query);

    match search_catalog(&query, state.books.as_ref()).await {
        Ok(books) => Ok(Json(books)),
        Err(e) => {
            if matches!(e, ServiceError::UpstreamUnavailable(_)) {
                error!("Failed to fetch books: {}", e);
            }
            Err(e)
        }
    }
}

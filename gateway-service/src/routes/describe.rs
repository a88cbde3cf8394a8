use crate::error::ServiceError;
use crate::models::responses::{DescribeRequest, DescribeResponse};
use crate::routes::AppState;
use axum::{extract::State, response::Json};
use tracing::{error, info};

pub async fn describe_book(
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, ServiceError> {
    info!("Describe request for {:?}", request.title);

    let subjects = request.subjects.unwrap_or_default();
    match crate::services::description::describe_book(
        request.title.as_deref(),
        request.author.as_deref(),
        &subjects,
        state.descriptions.as_ref(),
    )
    .await
    {
        Ok(description) => Ok(Json(DescribeResponse { description })),
        Err(e) => {
            if matches!(e, ServiceError::UpstreamUnavailable(_)) {
                error!("Failed to generate description: {}", e);
            }
            Err(e)
        }
    }
}

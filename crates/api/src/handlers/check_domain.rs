use axum::{extract::State, http::StatusCode, Json};
use tracing::{instrument, warn};

use crate::{
    dto::{CheckDomainRequest, DomainCheckResponse, ErrorResponse},
    state::AppState,
};

#[instrument(skip_all, name = "api_check_domain")]
pub async fn check_domain(
    State(state): State<AppState>,
    Json(req): Json<CheckDomainRequest>,
) -> Result<Json<DomainCheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.check_domain.execute(&req.domain).await {
        Ok(result) => Ok(Json(result.into())),
        Err(e) => {
            warn!(error = %e, "Rejected domain check request");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

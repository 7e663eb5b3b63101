use crate::model::{MetricsQuery, MetricsResponse};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;

pub async fn metrics_handler(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Json<MetricsResponse> {
    let top_domains = state
        .shortener()
        .top_domains(query.limit())
        .await
        .into_iter()
        .map(Into::into)
        .collect();

    Json(MetricsResponse { top_domains })
}

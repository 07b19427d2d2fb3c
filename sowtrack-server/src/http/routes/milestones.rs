//! Milestone endpoints
//!
//! Thin translation layer: axum extractors validate request shape, the
//! repository issues the SQL, and rows come back as JSON payloads.
//! Malformed path ids, query types, and form bodies are rejected by the
//! extractors before any handler runs.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Form, Json, Router,
};

use crate::db::MilestoneRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{
    ListParams, ListQuery, ListResponse, Milestone, MilestoneEdit, NewMilestone, SortColumn,
};

/// GET /milestones - list milestones, optionally filtered by statement of work
async fn list_milestones(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Milestone>>, ApiError> {
    // Unknown sort columns are rejected before any query is issued.
    let order = match params.sortby.as_deref() {
        Some(column) => SortColumn::parse(column)?,
        None => SortColumn::default(),
    };

    let list = MilestoneRepo::new(&state.pool)
        .list(ListQuery::from(&params), order)
        .await?;
    Ok(Json(list))
}

/// GET /milestones/{id} - get a single milestone
async fn get_milestone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Milestone>, ApiError> {
    let milestone = MilestoneRepo::new(&state.pool).get(id).await?;
    Ok(Json(milestone))
}

/// POST /milestones - create from form fields, all required
async fn create_milestone(
    State(state): State<Arc<AppState>>,
    Form(new): Form<NewMilestone>,
) -> Result<Json<Milestone>, ApiError> {
    let milestone = MilestoneRepo::new(&state.pool).create(new).await?;
    Ok(Json(milestone))
}

/// PUT /milestones/{id} - update name and status
async fn update_milestone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(edit): Json<MilestoneEdit>,
) -> Result<Json<Milestone>, ApiError> {
    let milestone = MilestoneRepo::new(&state.pool).update(id, edit).await?;
    Ok(Json(milestone))
}

/// DELETE /milestones/{id} - delete and return the removed row
async fn delete_milestone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Milestone>, ApiError> {
    let milestone = MilestoneRepo::new(&state.pool).delete(id).await?;
    Ok(Json(milestone))
}

/// Milestone routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/milestones", get(list_milestones).post(create_milestone))
        .route(
            "/milestones/{id}",
            get(get_milestone)
                .put(update_milestone)
                .delete(delete_milestone),
        )
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::http::server::build_router;

    // A lazy pool never connects; requests that fail validation at the
    // boundary must come back before the pool is touched.
    fn test_app() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://sowtrack@localhost/sowtrack")
            .expect("lazy pool");
        build_router(Arc::new(AppState { pool }))
    }

    #[tokio::test]
    async fn unknown_sortby_is_rejected_without_a_query() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/milestones?sortby=created_at")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn create_with_missing_field_is_rejected_at_the_boundary() {
        // No `status` field
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/milestones")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("sow_id=1&name=Kickoff"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_at_the_boundary() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/milestones/kickoff")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_is_wired_alongside_milestones() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

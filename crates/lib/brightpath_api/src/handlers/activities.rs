//! Activity catalogue endpoints.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use brightpath_core::activities::{self, ActivityCategory, ActivityInfo, ActivityKind};

use crate::error::AppResult;
use crate::models::{ActivitiesQuery, ActivityListResponse};

/// `GET /api/activities`: list the catalogue, optionally by `?category=`.
pub async fn list_activities_handler(
    query: Result<Query<ActivitiesQuery>, QueryRejection>,
) -> AppResult<Json<ActivityListResponse>> {
    let Query(query) = query?;
    let category = query
        .category
        .as_deref()
        .map(str::parse::<ActivityCategory>)
        .transpose()?;
    let items = activities::by_category(category);
    Ok(Json(ActivityListResponse {
        total: items.len(),
        items,
    }))
}

/// `GET /api/activities/{id}`: one catalogue entry.
pub async fn get_activity_handler(
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ActivityInfo>> {
    let Path(id) = id?;
    let kind: ActivityKind = id.parse()?;
    Ok(Json(kind.info()))
}

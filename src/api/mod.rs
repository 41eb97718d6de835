use axum::Json;
use axum::extract::{Path, Query};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Local;
use serde::Deserialize;

use crate::error::AppError;
use crate::firebase::SnapshotPath;
use crate::models::{Course, FilterState, FlattenedSearchRecord};
use crate::services::{CourseDetail, SearchSession, project_course_detail};
use crate::state::AppState;

/// Search screen inputs. An empty value is the pickers' "any".
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    day: String,
    #[serde(default)]
    time: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/{id}", get(course_detail))
        .route("/search", get(search_classes))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.source.fetch(&SnapshotPath::Courses).await?;
    Ok(StatusCode::OK)
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog().courses.clone())
}

async fn course_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetail>, AppError> {
    let value = state.source.fetch(&SnapshotPath::Course(id.clone())).await?;
    let detail = project_course_detail(&id, &value, Local::now().naive_local())?;
    Ok(Json(detail))
}

async fn search_classes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FlattenedSearchRecord>>, AppError> {
    let filters = FilterState::from_params(&params.q, &params.day, &params.time)?;
    let mut session = SearchSession::with_filters(filters);
    session.replace_records(state.catalog().classes.clone());
    Ok(Json(session.into_results()))
}

//! Motion coaching endpoints.
//!
//! All stateless: the client holds session totals and sends them back with
//! each progress update.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use brightpath_core::coaching::PoseSignals;
use brightpath_core::coaching::session::{self, RETRY_PROMPT};
use brightpath_core::coaching::tasks;

use crate::error::{AppError, AppResult};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, CoachTasksQuery, CoachTasksResponse, ProgressRequest,
    ProgressResponse,
};

/// `GET /api/coach/tasks?completed=N`: tasks unlocked at this progress level.
pub async fn list_tasks_handler(
    query: Result<Query<CoachTasksQuery>, QueryRejection>,
) -> AppResult<Json<CoachTasksResponse>> {
    let Query(query) = query?;
    let difficulty = tasks::difficulty_for(query.completed);
    Ok(Json(CoachTasksResponse {
        difficulty,
        tasks: tasks::available_tasks(difficulty)
            .into_iter()
            .copied()
            .collect(),
    }))
}

/// `POST /api/coach/analyze`: derive pose signals for one frame, and
/// optionally whether they satisfy a given task.
pub async fn analyze_handler(
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<AnalyzeResponse>> {
    let Json(body) = body?;
    let signals = PoseSignals::analyze(&body.landmarks)?;
    let task_satisfied = match body.task_id {
        Some(id) => {
            let task = tasks::find_task(id)
                .ok_or_else(|| AppError::NotFound(format!("Unknown coaching task: {id}")))?;
            Some(task.is_satisfied(&signals))
        }
        None => None,
    };
    Ok(Json(AnalyzeResponse {
        signals,
        task_satisfied,
    }))
}

/// `POST /api/coach/progress`: record a task outcome and assign the next task.
pub async fn progress_handler(
    body: Result<Json<ProgressRequest>, JsonRejection>,
) -> AppResult<Json<ProgressResponse>> {
    let Json(body) = body?;
    let mut stats = body.stats;
    let mut rng = rand::rng();

    let feedback = if body.success {
        stats.record_success();
        session::encouragement(&mut rng)
    } else {
        stats.record_failure();
        RETRY_PROMPT
    };
    let next_task = *tasks::pick_task(stats.tasks_completed, &mut rng);

    Ok(Json(ProgressResponse {
        stats,
        feedback: feedback.to_string(),
        next_task,
    }))
}

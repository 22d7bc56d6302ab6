use axum::{
    extract::{Json, Query, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::errors::AppResult;
use crate::models::{NewTask, Task, TasksQuery};
use crate::services::CsvStore;

#[axum::debug_handler]
pub async fn create_task(
    State(store): State<CsvStore>,
    Json(form): Json<NewTask>,
) -> AppResult<Response> {
    tracing::info!("Creating task for user: {}", form.user);

    // The owner is not checked against the user table and the deadline is
    // free-form text.
    let task = Task {
        task: form.task,
        deadline: form.deadline,
        user: form.user,
    };
    store.append_task(task).await?;

    Ok(Json(json!({ "status": "Task Created" })).into_response())
}

#[axum::debug_handler]
pub async fn get_tasks(
    State(store): State<CsvStore>,
    Query(query): Query<TasksQuery>,
) -> AppResult<Response> {
    tracing::debug!("Listing tasks for user: {}", query.name);

    let tasks = store.tasks_for_user(&query.name).await?;

    Ok(Json(json!({ "tasks": tasks })).into_response())
}

//! Todo endpoints

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use acadia_core::domain::{Priority, Todo, TodoAttributes, TodoPatch};
use acadia_core::error::DomainError;
use acadia_core::usecase::{
    CreateTodoInput, CreateTodosForStudentsInput, FailedTodo, RejectTodoInput, VerifyTodoInput,
    VerifyTodosInput,
};
use acadia_core::{TodoFilter, TodoStats, TodoUseCaseFactory};

use crate::controllers::{ActionResponse, ApiError};
use crate::extract::TenantId;

fn factory(tenant: &TenantId) -> Result<TodoUseCaseFactory, ApiError> {
    Ok(TodoUseCaseFactory::from_global(tenant.as_str())?)
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub due_date: NaiveDateTime,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub priority: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

impl CreateTodoRequest {
    fn attributes(&self) -> TodoAttributes {
        TodoAttributes {
            title: self.title.clone(),
            description: self.description.clone(),
            subject: self.subject.clone(),
            priority: self.priority.clone(),
            estimated_duration_minutes: self.estimated_duration_minutes,
            notes: self.notes.clone(),
        }
    }
}

pub async fn store(
    tenant: TenantId,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    payload.validate()?;

    let todo = factory(&tenant)?
        .create_todo()
        .execute(CreateTodoInput {
            student_id: payload.student_id.clone(),
            due_date: payload.due_date,
            attributes: payload.attributes(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodosRequest {
    #[validate(length(min = 1))]
    pub student_ids: Vec<String>,
    #[validate(length(min = 1))]
    pub title: String,
    pub due_date: NaiveDateTime,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub priority: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkCreateResponse {
    pub success: bool,
    pub todo_count: usize,
    pub todo_ids: Vec<i64>,
}

pub async fn store_bulk(
    tenant: TenantId,
    Json(payload): Json<CreateTodosRequest>,
) -> Result<(StatusCode, Json<BulkCreateResponse>), ApiError> {
    payload.validate()?;

    let created = factory(&tenant)?
        .create_todos_for_students()
        .execute(CreateTodosForStudentsInput {
            student_ids: payload.student_ids.clone(),
            due_date: payload.due_date,
            attributes: TodoAttributes {
                title: payload.title.clone(),
                description: payload.description.clone(),
                subject: payload.subject.clone(),
                priority: payload.priority.clone(),
                estimated_duration_minutes: payload.estimated_duration_minutes,
                notes: payload.notes.clone(),
            },
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkCreateResponse {
            success: true,
            todo_count: created.todo_count,
            todo_ids: created.todo_ids,
        }),
    ))
}

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub student_id: Option<String>,
    pub completed: Option<bool>,
    pub verified: Option<bool>,
    #[serde(default)]
    pub include_deleted: bool,
    pub limit: Option<u64>,
}

pub async fn index(
    tenant: TenantId,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = factory(&tenant)?
        .get_todos()
        .execute(TodoFilter {
            student_id: query.student_id,
            completed: query.completed,
            verified: query.verified,
            include_deleted: query.include_deleted,
            limit: query.limit,
        })
        .await?;

    Ok(Json(todos))
}

pub async fn show(tenant: TenantId, Path(id): Path<i64>) -> Result<Json<Todo>, ApiError> {
    let todo = factory(&tenant)?.get_todo().by_id_or_fail(id).await?;
    Ok(Json(todo))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateTodoRequest {
    fn into_patch(self) -> Result<TodoPatch, ApiError> {
        // Updates parse the priority strictly; the lenient normal-fallback is
        // a creation-only behavior.
        let priority = match self.priority.as_deref() {
            Some(value) => Some(Priority::from_str(value).ok_or_else(|| {
                ApiError::from(DomainError::validation("priority", "unknown priority"))
            })?),
            None => None,
        };

        Ok(TodoPatch {
            title: self.title,
            description: self.description,
            subject: self.subject,
            due_date: self.due_date,
            priority,
            estimated_duration_minutes: self.estimated_duration_minutes,
            notes: self.notes,
        })
    }
}

pub async fn update(
    tenant: TenantId,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    payload.validate()?;

    let todo = factory(&tenant)?
        .update_todo()
        .execute(id, payload.into_patch()?)
        .await?;

    Ok(Json(todo))
}

pub async fn complete(
    tenant: TenantId,
    Path(id): Path<i64>,
) -> Result<Json<ActionResponse>, ApiError> {
    factory(&tenant)?.complete_todo().execute(id).await?;
    Ok(Json(ActionResponse::ok("todo completed")))
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyTodoRequest {
    #[validate(length(min = 1))]
    pub verified_by: String,
}

pub async fn verify(
    tenant: TenantId,
    Path(id): Path<i64>,
    Json(payload): Json<VerifyTodoRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    payload.validate()?;

    factory(&tenant)?
        .verify_todo()
        .execute(VerifyTodoInput {
            todo_id: id,
            verified_by: payload.verified_by,
        })
        .await?;

    Ok(Json(ActionResponse::ok("todo verified")))
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyTodosRequest {
    #[validate(length(min = 1))]
    pub todo_ids: Vec<i64>,
    #[validate(length(min = 1))]
    pub verified_by: String,
}

#[derive(Debug, Serialize)]
pub struct BulkVerifyResponse {
    pub success: bool,
    pub verified_count: usize,
    pub verified_todo_ids: Vec<i64>,
    pub failed: Vec<FailedTodo>,
}

pub async fn verify_bulk(
    tenant: TenantId,
    Json(payload): Json<VerifyTodosRequest>,
) -> Result<Json<BulkVerifyResponse>, ApiError> {
    payload.validate()?;

    let outcome = factory(&tenant)?
        .verify_todos()
        .execute(VerifyTodosInput {
            todo_ids: payload.todo_ids,
            verified_by: payload.verified_by,
        })
        .await?;

    Ok(Json(BulkVerifyResponse {
        success: true,
        verified_count: outcome.verified_count,
        verified_todo_ids: outcome.verified_todo_ids,
        failed: outcome.failed,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RejectTodoRequest {
    #[validate(length(min = 1))]
    pub feedback: String,
}

pub async fn reject(
    tenant: TenantId,
    Path(id): Path<i64>,
    Json(payload): Json<RejectTodoRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    payload.validate()?;

    factory(&tenant)?
        .reject_todo()
        .execute(RejectTodoInput {
            todo_id: id,
            feedback: payload.feedback,
        })
        .await?;

    Ok(Json(ActionResponse::ok("todo rejected")))
}

pub async fn destroy(
    tenant: TenantId,
    Path(id): Path<i64>,
) -> Result<Json<ActionResponse>, ApiError> {
    factory(&tenant)?.delete_todo().execute(id).await?;
    Ok(Json(ActionResponse::ok("todo deleted")))
}

#[derive(Debug, Deserialize, Default)]
pub struct UpcomingQuery {
    pub days: Option<i64>,
}

pub async fn upcoming(
    tenant: TenantId,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = factory(&tenant)?.get_todo().upcoming(query.days).await?;
    Ok(Json(todos))
}

pub async fn overdue(tenant: TenantId) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = factory(&tenant)?.get_todo().overdue().await?;
    Ok(Json(todos))
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: TodoStats,
    pub completion_rate: f64,
}

pub async fn stats(tenant: TenantId) -> Result<Json<StatsResponse>, ApiError> {
    let use_case = factory(&tenant)?.get_todo();
    let stats = use_case.stats().await?;
    let completion_rate = use_case.completion_rate().await?;

    Ok(Json(StatsResponse {
        stats,
        completion_rate,
    }))
}

//! SeaORM-backed todo repository
//!
//! Constructed once per request context from a connection plus the acting
//! tenant. Every query issued here carries the tenant filter, so a forgotten
//! `.eq(tenant_id)` in a caller cannot leak rows across tenants. Row-level
//! security on the store is not trusted: privileged pool connections bypass
//! it, so scoping is re-enforced in process.

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use async_trait::async_trait;

use crate::database::DbConnection;
use crate::domain::{Priority, Todo, TodoDraft, TodoPatch};
use crate::entities::todos;
use crate::error::DomainError;
use crate::repository::{TodoFilter, TodoRepository, TodoStats};

/// Rows returned by an unbounded list query
const DEFAULT_LIMIT: u64 = 100;

/// Tenant-scoped repository over the todos table
#[derive(Clone)]
pub struct SeaOrmTodoRepository {
    db: DbConnection,
    tenant_id: String,
}

impl SeaOrmTodoRepository {
    pub fn new(db: DbConnection, tenant_id: impl Into<String>) -> Self {
        Self {
            db,
            tenant_id: tenant_id.into(),
        }
    }

    /// Base select: bound tenant, live rows only
    fn scoped(&self) -> sea_orm::Select<todos::Entity> {
        todos::Entity::find()
            .filter(todos::Column::TenantId.eq(self.tenant_id.as_str()))
            .filter(todos::Column::DeletedAt.is_null())
    }

    fn read_error(&self, method: &'static str, e: sea_orm::DbErr) -> DomainError {
        tracing::error!(
            repository = "SeaOrmTodoRepository",
            method,
            tenant_id = %self.tenant_id,
            error = %e,
            "todo query failed"
        );
        DomainError::database("todo could not be read")
    }

    fn write_error(&self, method: &'static str, e: sea_orm::DbErr) -> DomainError {
        tracing::error!(
            repository = "SeaOrmTodoRepository",
            method,
            tenant_id = %self.tenant_id,
            error = %e,
            "todo write failed"
        );
        DomainError::database("todo could not be written")
    }

    fn to_domain(model: todos::Model) -> Todo {
        Todo {
            id: model.id,
            tenant_id: model.tenant_id,
            student_id: model.student_id,
            title: model.title,
            description: model.description,
            subject: model.subject,
            due_date: model.due_date,
            priority: Priority::from_str(&model.priority).unwrap_or_default(),
            estimated_duration_minutes: model.estimated_duration_minutes,
            notes: model.notes,
            feedback: model.feedback,
            completed_at: model.completed_at,
            verified_at: model.verified_at,
            verified_by: model.verified_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }

    fn draft_to_active(draft: TodoDraft, now: NaiveDateTime) -> todos::ActiveModel {
        todos::ActiveModel {
            tenant_id: Set(draft.tenant_id),
            student_id: Set(draft.student_id),
            title: Set(draft.title),
            description: Set(draft.description),
            subject: Set(draft.subject),
            due_date: Set(draft.due_date),
            priority: Set(draft.priority.as_str().to_string()),
            estimated_duration_minutes: Set(draft.estimated_duration_minutes),
            notes: Set(draft.notes),
            feedback: Set(None),
            completed_at: Set(None),
            verified_at: Set(None),
            verified_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, DomainError> {
        let model = self
            .scoped()
            .filter(todos::Column::Id.eq(id))
            .one(self.db.inner())
            .await
            .map_err(|e| self.read_error("find_by_id", e))?;

        Ok(model.map(Self::to_domain))
    }

    async fn find_all(&self, filter: &TodoFilter) -> Result<Vec<Todo>, DomainError> {
        let mut query = todos::Entity::find()
            .filter(todos::Column::TenantId.eq(self.tenant_id.as_str()));

        if !filter.include_deleted {
            query = query.filter(todos::Column::DeletedAt.is_null());
        }
        if let Some(student_id) = &filter.student_id {
            query = query.filter(todos::Column::StudentId.eq(student_id.as_str()));
        }
        if let Some(completed) = filter.completed {
            query = if completed {
                query.filter(todos::Column::CompletedAt.is_not_null())
            } else {
                query.filter(todos::Column::CompletedAt.is_null())
            };
        }
        if let Some(verified) = filter.verified {
            query = if verified {
                query.filter(todos::Column::VerifiedAt.is_not_null())
            } else {
                query.filter(todos::Column::VerifiedAt.is_null())
            };
        }

        // Secondary sort on id keeps pagination deterministic for equal due dates
        let models = query
            .order_by_asc(todos::Column::DueDate)
            .order_by_asc(todos::Column::Id)
            .limit(filter.limit.unwrap_or(DEFAULT_LIMIT))
            .all(self.db.inner())
            .await
            .map_err(|e| self.read_error("find_all", e))?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    async fn find_by_student(
        &self,
        student_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<Todo>, DomainError> {
        let filter = TodoFilter {
            student_id: Some(student_id.to_string()),
            limit,
            ..Default::default()
        };
        self.find_all(&filter).await
    }

    async fn find_upcoming(&self, days: i64) -> Result<Vec<Todo>, DomainError> {
        let now = Utc::now().naive_utc();
        let until = now + Duration::days(days);

        let models = self
            .scoped()
            .filter(todos::Column::CompletedAt.is_null())
            .filter(todos::Column::DueDate.gte(now))
            .filter(todos::Column::DueDate.lte(until))
            .order_by_asc(todos::Column::DueDate)
            .order_by_asc(todos::Column::Id)
            .limit(DEFAULT_LIMIT)
            .all(self.db.inner())
            .await
            .map_err(|e| self.read_error("find_upcoming", e))?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    async fn find_overdue(&self) -> Result<Vec<Todo>, DomainError> {
        let now = Utc::now().naive_utc();

        let models = self
            .scoped()
            .filter(todos::Column::CompletedAt.is_null())
            .filter(todos::Column::DueDate.lt(now))
            .order_by_asc(todos::Column::DueDate)
            .order_by_asc(todos::Column::Id)
            .limit(DEFAULT_LIMIT)
            .all(self.db.inner())
            .await
            .map_err(|e| self.read_error("find_overdue", e))?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }

    async fn insert(&self, draft: TodoDraft) -> Result<Todo, DomainError> {
        let now = Utc::now().naive_utc();
        let model = Self::draft_to_active(draft, now)
            .insert(self.db.inner())
            .await
            .map_err(|e| self.write_error("insert", e))?;

        Ok(Self::to_domain(model))
    }

    async fn insert_many(&self, drafts: Vec<TodoDraft>) -> Result<Vec<i64>, DomainError> {
        let now = Utc::now().naive_utc();

        let txn = self
            .db
            .inner()
            .begin()
            .await
            .map_err(|e| self.write_error("insert_many", e))?;

        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let inserted = Self::draft_to_active(draft, now)
                .insert(&txn)
                .await
                .map_err(|e| self.write_error("insert_many", e))?;
            ids.push(inserted.id);
        }

        txn.commit()
            .await
            .map_err(|e| self.write_error("insert_many", e))?;

        Ok(ids)
    }

    async fn update_fields(&self, id: i64, patch: &TodoPatch) -> Result<Todo, DomainError> {
        let now = Utc::now().naive_utc();

        // Only columns present in the patch are Set; concurrent partial
        // updates to other fields are left alone.
        let mut active = todos::ActiveModel {
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(title) = &patch.title {
            // stored trimmed, same as creation
            active.title = Set(title.trim().to_string());
        }
        if let Some(description) = &patch.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(subject) = &patch.subject {
            active.subject = Set(Some(subject.clone()));
        }
        if let Some(due_date) = patch.due_date {
            active.due_date = Set(due_date);
        }
        if let Some(priority) = patch.priority {
            active.priority = Set(priority.as_str().to_string());
        }
        if let Some(minutes) = patch.estimated_duration_minutes {
            active.estimated_duration_minutes = Set(Some(minutes));
        }
        if let Some(notes) = &patch.notes {
            active.notes = Set(Some(notes.clone()));
        }

        let result = todos::Entity::update_many()
            .set(active)
            .filter(todos::Column::Id.eq(id))
            .filter(todos::Column::TenantId.eq(self.tenant_id.as_str()))
            .filter(todos::Column::DeletedAt.is_null())
            .exec(self.db.inner())
            .await
            .map_err(|e| self.write_error("update_fields", e))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Todo"));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))
    }

    async fn save_state(&self, todo: &Todo) -> Result<(), DomainError> {
        let now = Utc::now().naive_utc();

        let active = todos::ActiveModel {
            completed_at: Set(todo.completed_at),
            verified_at: Set(todo.verified_at),
            verified_by: Set(todo.verified_by.clone()),
            feedback: Set(todo.feedback.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = todos::Entity::update_many()
            .set(active)
            .filter(todos::Column::Id.eq(todo.id))
            .filter(todos::Column::TenantId.eq(self.tenant_id.as_str()))
            .filter(todos::Column::DeletedAt.is_null())
            .exec(self.db.inner())
            .await
            .map_err(|e| self.write_error("save_state", e))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Todo"));
        }
        Ok(())
    }

    async fn save_state_many(&self, todos_batch: &[Todo]) -> Result<(), DomainError> {
        let txn = self
            .db
            .inner()
            .begin()
            .await
            .map_err(|e| self.write_error("save_state_many", e))?;
        let now = Utc::now().naive_utc();

        for todo in todos_batch {
            let active = todos::ActiveModel {
                completed_at: Set(todo.completed_at),
                verified_at: Set(todo.verified_at),
                verified_by: Set(todo.verified_by.clone()),
                feedback: Set(todo.feedback.clone()),
                updated_at: Set(now),
                ..Default::default()
            };

            todos::Entity::update_many()
                .set(active)
                .filter(todos::Column::Id.eq(todo.id))
                .filter(todos::Column::TenantId.eq(self.tenant_id.as_str()))
                .filter(todos::Column::DeletedAt.is_null())
                .exec(&txn)
                .await
                .map_err(|e| self.write_error("save_state_many", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| self.write_error("save_state_many", e))?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), DomainError> {
        let now = Utc::now().naive_utc();

        let active = todos::ActiveModel {
            deleted_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = todos::Entity::update_many()
            .set(active)
            .filter(todos::Column::Id.eq(id))
            .filter(todos::Column::TenantId.eq(self.tenant_id.as_str()))
            .filter(todos::Column::DeletedAt.is_null())
            .exec(self.db.inner())
            .await
            .map_err(|e| self.write_error("soft_delete", e))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Todo"));
        }
        Ok(())
    }

    async fn stats(&self) -> Result<TodoStats, DomainError> {
        let now = Utc::now().naive_utc();

        let total = self
            .scoped()
            .count(self.db.inner())
            .await
            .map_err(|e| self.read_error("stats", e))?;

        let completed = self
            .scoped()
            .filter(todos::Column::CompletedAt.is_not_null())
            .count(self.db.inner())
            .await
            .map_err(|e| self.read_error("stats", e))?;

        let verified = self
            .scoped()
            .filter(todos::Column::VerifiedAt.is_not_null())
            .count(self.db.inner())
            .await
            .map_err(|e| self.read_error("stats", e))?;

        let overdue = self
            .scoped()
            .filter(todos::Column::CompletedAt.is_null())
            .filter(todos::Column::DueDate.lt(now))
            .count(self.db.inner())
            .await
            .map_err(|e| self.read_error("stats", e))?;

        Ok(TodoStats {
            total,
            completed,
            verified,
            overdue,
        })
    }

    async fn completion_rate(&self) -> Result<f64, DomainError> {
        let stats = self.stats().await?;
        if stats.total == 0 {
            return Ok(0.0);
        }
        Ok(stats.completed as f64 / stats.total as f64)
    }
}

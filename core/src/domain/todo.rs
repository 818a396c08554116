//! Todo aggregate root
//!
//! The entity owns invariant enforcement: lifecycle methods are pure
//! transitions that consume the current state and return the next one (or a
//! `DomainError` when the transition is not allowed). Persistence is the
//! repository's job; nothing here touches the store.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::Priority;
use crate::error::DomainError;

/// A unit of assigned student work with a due date
///
/// Lifecycle: created by staff → `complete` by the student → `verify` by staff,
/// or `reject` with feedback (which clears the completion). `tenant_id` is
/// immutable after creation; every query resolving a `Todo` is already scoped
/// to it by the repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub tenant_id: String,
    pub student_id: String,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub feedback: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub verified_at: Option<NaiveDateTime>,
    pub verified_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// A todo that has been validated but not yet persisted
///
/// The repository assigns `id` and timestamps on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub tenant_id: String,
    pub student_id: String,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub due_date: NaiveDateTime,
    pub priority: Priority,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

/// Shared fields for creating one or more todos
#[derive(Debug, Clone, Default)]
pub struct TodoAttributes {
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub priority: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

impl TodoDraft {
    /// Validate and build a draft for one student
    ///
    /// Fails when tenant, student, or title (after trimming) is empty.
    pub fn new(
        tenant_id: &str,
        student_id: &str,
        due_date: NaiveDateTime,
        attrs: &TodoAttributes,
    ) -> Result<Self, DomainError> {
        if tenant_id.trim().is_empty() {
            return Err(DomainError::validation("tenant_id", "tenant_id is required"));
        }
        if student_id.trim().is_empty() {
            return Err(DomainError::validation("student_id", "student_id is required"));
        }
        let title = attrs.title.trim();
        if title.is_empty() {
            return Err(DomainError::validation("title", "title must not be empty"));
        }

        Ok(Self {
            tenant_id: tenant_id.to_string(),
            student_id: student_id.to_string(),
            title: title.to_string(),
            description: attrs.description.clone(),
            subject: attrs.subject.clone(),
            due_date,
            priority: Priority::from_input(attrs.priority.as_deref()),
            estimated_duration_minutes: attrs.estimated_duration_minutes,
            notes: attrs.notes.clone(),
        })
    }
}

/// Partial update: only present fields are applied, and only the columns they
/// map to are written back by the repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub estimated_duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Todo {
    /// Whether the student has marked this todo done
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether staff has confirmed the completed work
    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }

    /// Whether the due date has passed without completion
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.is_completed() && self.due_date < now
    }

    /// Apply a partial field update
    ///
    /// Unspecified fields are untouched. An explicitly provided title must be
    /// non-empty after trimming.
    pub fn update(mut self, patch: &TodoPatch) -> Result<Self, DomainError> {
        if let Some(title) = &patch.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(DomainError::validation("title", "title must not be empty"));
            }
            self.title = title.to_string();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(subject) = &patch.subject {
            self.subject = Some(subject.clone());
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(minutes) = patch.estimated_duration_minutes {
            self.estimated_duration_minutes = Some(minutes);
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
        Ok(self)
    }

    /// Student marks the todo done
    pub fn complete(mut self, now: NaiveDateTime) -> Result<Self, DomainError> {
        if self.is_verified() {
            return Err(DomainError::invalid_transition(
                "todo is already verified and cannot be completed again",
            ));
        }
        if self.is_completed() {
            return Err(DomainError::invalid_transition("todo is already completed"));
        }
        self.completed_at = Some(now);
        Ok(self)
    }

    /// Staff confirms the completed work
    ///
    /// Only allowed once, and only after completion.
    pub fn verify(mut self, verified_by: &str, now: NaiveDateTime) -> Result<Self, DomainError> {
        if !self.is_completed() {
            return Err(DomainError::invalid_transition(
                "todo is not completed and cannot be verified",
            ));
        }
        if self.is_verified() {
            return Err(DomainError::invalid_transition("todo is already verified"));
        }
        self.verified_at = Some(now);
        self.verified_by = Some(verified_by.to_string());
        Ok(self)
    }

    /// Staff sends completed work back to the student with feedback
    ///
    /// Clears the completion so the student can redo the work. Verified todos
    /// cannot be rejected; the staff sign-off stands.
    pub fn reject(mut self, feedback: &str) -> Result<Self, DomainError> {
        if self.is_verified() {
            return Err(DomainError::invalid_transition(
                "todo is already verified and cannot be rejected",
            ));
        }
        if !self.is_completed() {
            return Err(DomainError::invalid_transition(
                "todo is not completed and cannot be rejected",
            ));
        }
        self.completed_at = None;
        self.verified_at = None;
        self.verified_by = None;
        self.feedback = Some(feedback.to_string());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn todo() -> Todo {
        Todo {
            id: 1,
            tenant_id: "t1".into(),
            student_id: "s1".into(),
            title: "Read Ch.3".into(),
            description: None,
            subject: Some("english".into()),
            due_date: dt(10),
            priority: Priority::Normal,
            estimated_duration_minutes: None,
            notes: None,
            feedback: None,
            completed_at: None,
            verified_at: None,
            verified_by: None,
            created_at: dt(1),
            updated_at: dt(1),
            deleted_at: None,
        }
    }

    #[test]
    fn draft_trims_title_and_rejects_blank() {
        let attrs = TodoAttributes {
            title: "  Read Ch.3  ".into(),
            ..Default::default()
        };
        let draft = TodoDraft::new("t1", "s1", dt(10), &attrs).unwrap();
        assert_eq!(draft.title, "Read Ch.3");
        assert_eq!(draft.priority, Priority::Normal);

        let blank = TodoAttributes {
            title: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(
            TodoDraft::new("t1", "s1", dt(10), &blank),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn draft_requires_tenant_and_student() {
        let attrs = TodoAttributes {
            title: "x".into(),
            ..Default::default()
        };
        assert!(TodoDraft::new("", "s1", dt(10), &attrs).is_err());
        assert!(TodoDraft::new("t1", "", dt(10), &attrs).is_err());
    }

    #[test]
    fn verify_requires_completion() {
        let err = todo().verify("staff-1", dt(11)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }

    #[test]
    fn verify_is_a_one_time_transition() {
        let done = todo().complete(dt(9)).unwrap();
        let verified = done.verify("staff-1", dt(11)).unwrap();
        assert_eq!(verified.verified_by.as_deref(), Some("staff-1"));

        let again = verified.clone().verify("staff-2", dt(12)).unwrap_err();
        assert!(matches!(again, DomainError::InvalidTransition { .. }));
        // original verification untouched
        assert_eq!(verified.verified_at, Some(dt(11)));
        assert_eq!(verified.verified_by.as_deref(), Some("staff-1"));
    }

    #[test]
    fn complete_cannot_happen_twice() {
        let done = todo().complete(dt(9)).unwrap();
        assert!(done.complete(dt(10)).is_err());
    }

    #[test]
    fn reject_clears_completion_and_records_feedback() {
        let done = todo().complete(dt(9)).unwrap();
        let rejected = done.reject("redo problem 4").unwrap();
        assert!(!rejected.is_completed());
        assert!(rejected.verified_at.is_none());
        assert_eq!(rejected.feedback.as_deref(), Some("redo problem 4"));
    }

    #[test]
    fn reject_requires_completed_unverified_state() {
        assert!(todo().reject("nope").is_err());
        let verified = todo()
            .complete(dt(9))
            .unwrap()
            .verify("staff-1", dt(10))
            .unwrap();
        assert!(verified.reject("nope").is_err());
    }

    #[test]
    fn update_touches_only_provided_fields() {
        let patch = TodoPatch {
            title: Some("Read Ch.4".into()),
            due_date: Some(dt(20)),
            ..Default::default()
        };
        let updated = todo().update(&patch).unwrap();
        assert_eq!(updated.title, "Read Ch.4");
        assert_eq!(updated.due_date, dt(20));
        assert_eq!(updated.subject.as_deref(), Some("english"));
        assert_eq!(updated.priority, Priority::Normal);
    }

    #[test]
    fn update_rejects_blank_title_but_allows_omitting_it() {
        let blank = TodoPatch {
            title: Some("  ".into()),
            ..Default::default()
        };
        assert!(todo().update(&blank).is_err());

        let no_title = TodoPatch {
            notes: Some("bring workbook".into()),
            ..Default::default()
        };
        assert!(todo().update(&no_title).is_ok());
    }

    #[test]
    fn overdue_depends_on_completion() {
        assert!(todo().is_overdue(dt(11)));
        assert!(!todo().is_overdue(dt(9)));
        let done = todo().complete(dt(9)).unwrap();
        assert!(!done.is_overdue(dt(11)));
    }
}

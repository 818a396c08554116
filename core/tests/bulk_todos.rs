//! Bulk create and bulk verify: partial-failure semantics

use chrono::{Duration, NaiveDateTime, Utc};
use pretty_assertions::assert_eq;

use acadia_core::domain::TodoAttributes;
use acadia_core::error::DomainError;
use acadia_core::testing::TestDatabase;
use acadia_core::usecase::{
    CreateTodoInput, CreateTodosForStudentsInput, VerifyTodoInput, VerifyTodosInput,
};
use acadia_core::TodoFilter;

fn in_days(days: i64) -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::days(days)
}

fn shared_attrs(title: &str) -> TodoAttributes {
    TodoAttributes {
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn bulk_create_fans_out_one_todo_per_student() {
    let db = TestDatabase::new().await;
    let factory = db.factory("t1");

    let result = factory
        .create_todos_for_students()
        .execute(CreateTodosForStudentsInput {
            student_ids: vec!["s1".into(), "s2".into(), "s3".into()],
            due_date: in_days(4),
            attributes: shared_attrs("Group reading"),
        })
        .await
        .unwrap();

    assert_eq!(result.todo_count, 3);
    assert_eq!(result.todo_ids.len(), 3);

    for student in ["s1", "s2", "s3"] {
        let todos = factory.get_todo().by_student(student, None).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Group reading");
    }
}

#[tokio::test]
async fn bulk_create_with_no_students_fails_before_any_write() {
    let db = TestDatabase::new().await;
    let factory = db.factory("t1");

    let err = factory
        .create_todos_for_students()
        .execute(CreateTodosForStudentsInput {
            student_ids: vec![],
            due_date: in_days(4),
            attributes: shared_attrs("Group reading"),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let all = factory
        .get_todos()
        .execute(TodoFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 0);
}

#[tokio::test]
async fn bulk_create_with_blank_title_fails_whole_batch() {
    let db = TestDatabase::new().await;
    let factory = db.factory("t1");

    let err = factory
        .create_todos_for_students()
        .execute(CreateTodosForStudentsInput {
            student_ids: vec!["s1".into(), "s2".into()],
            due_date: in_days(4),
            attributes: shared_attrs("  "),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn bulk_verify_reports_per_item_failures_without_aborting() {
    let db = TestDatabase::new().await;
    let ours = db.factory("t1");
    let theirs = db.factory("t2");

    // a: valid, completed
    let a = ours
        .create_todo()
        .execute(CreateTodoInput {
            student_id: "s1".into(),
            due_date: in_days(2),
            attributes: shared_attrs("A"),
        })
        .await
        .unwrap();
    ours.complete_todo().execute(a.id).await.unwrap();

    // b: belongs to another tenant
    let b = theirs
        .create_todo()
        .execute(CreateTodoInput {
            student_id: "s9".into(),
            due_date: in_days(2),
            attributes: shared_attrs("B"),
        })
        .await
        .unwrap();
    theirs.complete_todo().execute(b.id).await.unwrap();

    // c: already verified
    let c = ours
        .create_todo()
        .execute(CreateTodoInput {
            student_id: "s2".into(),
            due_date: in_days(2),
            attributes: shared_attrs("C"),
        })
        .await
        .unwrap();
    ours.complete_todo().execute(c.id).await.unwrap();
    ours.verify_todo()
        .execute(VerifyTodoInput {
            todo_id: c.id,
            verified_by: "staff-1".into(),
        })
        .await
        .unwrap();

    let outcome = ours
        .verify_todos()
        .execute(VerifyTodosInput {
            todo_ids: vec![a.id, b.id, c.id],
            verified_by: "staff-1".into(),
        })
        .await
        .unwrap();

    assert_eq!(outcome.verified_count, 1);
    assert_eq!(outcome.verified_todo_ids, vec![a.id]);
    assert_eq!(outcome.failed.len(), 2);

    let failed_ids: Vec<i64> = outcome.failed.iter().map(|f| f.id).collect();
    assert_eq!(failed_ids, vec![b.id, c.id]);

    // a was actually persisted as verified
    let fetched = ours.get_todo().by_id_or_fail(a.id).await.unwrap();
    assert!(fetched.is_verified());

    // b stays untouched in its own tenant
    let foreign = theirs.get_todo().by_id_or_fail(b.id).await.unwrap();
    assert!(!foreign.is_verified());
}

#[tokio::test]
async fn bulk_verify_without_verifier_is_an_operation_level_failure() {
    let db = TestDatabase::new().await;
    let factory = db.factory("t1");

    let a = factory
        .create_todo()
        .execute(CreateTodoInput {
            student_id: "s1".into(),
            due_date: in_days(2),
            attributes: shared_attrs("A"),
        })
        .await
        .unwrap();
    factory.complete_todo().execute(a.id).await.unwrap();

    let err = factory
        .verify_todos()
        .execute(VerifyTodosInput {
            todo_ids: vec![a.id],
            verified_by: "  ".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let fetched = factory.get_todo().by_id_or_fail(a.id).await.unwrap();
    assert!(!fetched.is_verified());
}

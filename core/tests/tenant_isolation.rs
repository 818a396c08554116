//! Tenant isolation: no operation may cross tenant boundaries

use chrono::{Duration, NaiveDateTime, Utc};
use pretty_assertions::assert_eq;

use acadia_core::domain::{TodoAttributes, TodoPatch};
use acadia_core::error::DomainError;
use acadia_core::testing::TestDatabase;
use acadia_core::usecase::CreateTodoInput;
use acadia_core::TodoFilter;

fn in_days(days: i64) -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::days(days)
}

fn input(student: &str, title: &str) -> CreateTodoInput {
    CreateTodoInput {
        student_id: student.to_string(),
        due_date: in_days(3),
        attributes: TodoAttributes {
            title: title.to_string(),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn list_reads_never_return_foreign_rows() {
    let db = TestDatabase::new().await;
    let ours = db.factory("t1");
    let theirs = db.factory("t2");

    ours.create_todo().execute(input("s1", "Ours")).await.unwrap();
    theirs
        .create_todo()
        .execute(input("s1", "Theirs"))
        .await
        .unwrap();

    let rows = ours.get_todos().execute(TodoFilter::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|t| t.tenant_id == "t1"));

    // include_deleted widens the soft-delete filter, never the tenant filter
    let rows = ours
        .get_todos()
        .execute(TodoFilter {
            include_deleted: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(rows.iter().all(|t| t.tenant_id == "t1"));
}

#[tokio::test]
async fn foreign_todo_is_indistinguishable_from_absent() {
    let db = TestDatabase::new().await;
    let ours = db.factory("t1");
    let theirs = db.factory("t2");

    let foreign = theirs
        .create_todo()
        .execute(input("s1", "Theirs"))
        .await
        .unwrap();

    assert!(ours.get_todo().by_id(foreign.id).await.unwrap().is_none());

    let err = ours.get_todo().by_id_or_fail(foreign.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn foreign_mutations_are_not_found_and_do_not_mutate() {
    let db = TestDatabase::new().await;
    let ours = db.factory("t1");
    let theirs = db.factory("t2");

    let foreign = theirs
        .create_todo()
        .execute(input("s1", "Theirs"))
        .await
        .unwrap();

    let patch = TodoPatch {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        ours.update_todo().execute(foreign.id, patch).await.unwrap_err(),
        DomainError::NotFound { .. }
    ));
    assert!(matches!(
        ours.complete_todo().execute(foreign.id).await.unwrap_err(),
        DomainError::NotFound { .. }
    ));
    assert!(matches!(
        ours.delete_todo().execute(foreign.id).await.unwrap_err(),
        DomainError::NotFound { .. }
    ));

    let untouched = theirs.get_todo().by_id_or_fail(foreign.id).await.unwrap();
    assert_eq!(untouched.title, "Theirs");
    assert!(!untouched.is_completed());
    assert!(untouched.deleted_at.is_none());
}

#[tokio::test]
async fn stats_are_scoped_to_the_bound_tenant() {
    let db = TestDatabase::new().await;
    let ours = db.factory("t1");
    let theirs = db.factory("t2");

    ours.create_todo().execute(input("s1", "A")).await.unwrap();
    theirs.create_todo().execute(input("s1", "B")).await.unwrap();
    theirs.create_todo().execute(input("s2", "C")).await.unwrap();

    assert_eq!(ours.get_todo().stats().await.unwrap().total, 1);
    assert_eq!(theirs.get_todo().stats().await.unwrap().total, 2);
}

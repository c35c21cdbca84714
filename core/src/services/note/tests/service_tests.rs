use std::sync::Arc;

use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockNoteRepository;
use crate::services::note::{NoteChanges, NoteService};

fn service() -> NoteService<MockNoteRepository> {
    NoteService::new(Arc::new(MockNoteRepository::new()))
}

#[tokio::test]
async fn test_create_trims_fields() {
    let service = service();
    let note = service
        .create(Some("  Footwork "), Some(" Split step timing "), 7)
        .await
        .unwrap();

    assert_eq!(note.title, "Footwork");
    assert_eq!(note.content, "Split step timing");
    assert_eq!(note.user_id, 7);
}

#[tokio::test]
async fn test_create_requires_title_and_content() {
    let service = service();
    let result = service.create(None, Some("   "), 7).await;

    match result {
        Err(DomainError::Validation(error)) => {
            assert_eq!(error.to_string(), "Required fields: title, content");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_list_scoped_and_unscoped() {
    let service = service();
    service.create(Some("a"), Some("x"), 7).await.unwrap();
    service.create(Some("b"), Some("x"), 99).await.unwrap();

    assert_eq!(service.list(None).await.unwrap().len(), 2);
    assert_eq!(service.list(Some(7)).await.unwrap().len(), 1);
    assert_eq!(service.count(Some(99)).await.unwrap(), 1);
}

#[tokio::test]
async fn test_search_by_title() {
    let service = service();
    service.create(Some("Serve drills"), Some("x"), 7).await.unwrap();
    service.create(Some("Volley drills"), Some("x"), 7).await.unwrap();

    let found = service.search(7, " serve ").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Serve drills");
}

#[tokio::test]
async fn test_update_changes_fields_and_owner() {
    let service = service();
    let note = service.create(Some("a"), Some("b"), 7).await.unwrap();

    let updated = service
        .update(
            note,
            NoteChanges {
                title: Some(" New title ".to_string()),
                content: None,
                user_id: Some(99),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "b");
    assert_eq!(updated.user_id, 99);
    assert_eq!(service.get(updated.id).await.unwrap().user_id, 99);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let service = service();
    let note = service.create(Some("a"), Some("b"), 7).await.unwrap();

    let result = service
        .update(
            note,
            NoteChanges {
                title: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::MissingFields { .. }))
    ));
}

#[tokio::test]
async fn test_get_and_delete_missing_note() {
    let service = service();
    assert!(matches!(service.get(5).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(service.delete(5).await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_for_user() {
    let service = service();
    service.create(Some("a"), Some("b"), 7).await.unwrap();
    service.create(Some("c"), Some("d"), 7).await.unwrap();

    assert_eq!(service.delete_for_user(7).await.unwrap(), 2);
    assert!(service.list(Some(7)).await.unwrap().is_empty());
}

//! Unit tests for the in-memory note repository

use crate::domain::entities::note::NewNote;
use crate::repositories::note::{MockNoteRepository, NoteRepository};

fn new_note(title: &str, user_id: i64) -> NewNote {
    NewNote {
        title: title.to_string(),
        content: "Serve practice".to_string(),
        user_id,
    }
}

#[tokio::test]
async fn test_list_by_user_and_count() {
    let repo = MockNoteRepository::new();
    repo.create(new_note("Monday drills", 7)).await.unwrap();
    repo.create(new_note("Tuesday drills", 7)).await.unwrap();
    repo.create(new_note("Match notes", 99)).await.unwrap();

    assert_eq!(repo.list_all().await.unwrap().len(), 3);
    assert_eq!(repo.list_by_user(7).await.unwrap().len(), 2);
    assert_eq!(repo.count(Some(99)).await.unwrap(), 1);
    assert_eq!(repo.count(None).await.unwrap(), 3);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let repo = MockNoteRepository::new();
    let first = repo.create(new_note("first", 7)).await.unwrap();
    let second = repo.create(new_note("second", 7)).await.unwrap();

    let ids: Vec<i64> = repo.list_by_user(7).await.unwrap().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_search_by_title_is_case_insensitive_and_scoped() {
    let repo = MockNoteRepository::new();
    repo.create(new_note("Backhand work", 7)).await.unwrap();
    repo.create(new_note("Forehand work", 7)).await.unwrap();
    repo.create(new_note("Backhand slice", 99)).await.unwrap();

    let found = repo.search_by_title(7, "BACKHAND").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Backhand work");

    assert_eq!(repo.search_by_title(7, "").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_by_user() {
    let repo = MockNoteRepository::new();
    repo.create(new_note("a", 7)).await.unwrap();
    repo.create(new_note("b", 7)).await.unwrap();
    let other = repo.create(new_note("c", 99)).await.unwrap();

    assert_eq!(repo.delete_by_user(7).await.unwrap(), 2);
    assert_eq!(repo.count(None).await.unwrap(), 1);
    assert!(repo.delete(other.id).await.unwrap());
    assert!(repo.find_by_id(other.id).await.unwrap().is_none());
}

//! Unit tests for the user service

use std::sync::Arc;

use crate::domain::entities::user::{Gender, Role};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockUserRepository;
use crate::services::password::PasswordHasher;
use crate::services::user::{CreateUser, ProfileInput, UserChanges, UserService};

fn service() -> UserService<MockUserRepository> {
    UserService::new(Arc::new(MockUserRepository::new()), PasswordHasher::new(4))
}

fn input(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        ..Default::default()
    }
}

fn validation_error(result: Result<impl std::fmt::Debug, DomainError>) -> ValidationError {
    match result {
        Err(DomainError::Validation(error)) => error,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_normalizes_and_hashes() {
    let service = service();
    let user = service
        .create(input("  serena ", "  Serena@Club.COM "))
        .await
        .unwrap();

    assert_eq!(user.username, "serena");
    assert_eq!(user.email, "serena@club.com");
    assert_eq!(user.role, Role::Client);
    assert!(user.is_active);
    assert_ne!(user.password_hash, "secret123");
    assert!(service.hasher().verify("secret123", &user.password_hash));
}

#[tokio::test]
async fn test_create_reports_all_missing_fields() {
    let service = service();
    let error = validation_error(
        service
            .create(CreateUser {
                username: "ana".to_string(),
                ..Default::default()
            })
            .await,
    );
    assert_eq!(error.to_string(), "Required fields: email, password");
}

#[tokio::test]
async fn test_create_rejects_invalid_values() {
    let service = service();

    let error = validation_error(service.create(input("ab", "ab@club.com")).await);
    assert_eq!(error.to_string(), "Username must be at least 3 characters");

    let error = validation_error(service.create(input("abc", "abc.club.com")).await);
    assert_eq!(error, ValidationError::InvalidEmail);

    let mut short_password = input("abc", "abc@club.com");
    short_password.password = "12345".to_string();
    let error = validation_error(service.create(short_password).await);
    assert_eq!(error.to_string(), "Password must be at least 6 characters");

    let mut bad_role = input("abc", "abc@club.com");
    bad_role.role = Some("owner".to_string());
    assert!(matches!(
        validation_error(service.create(bad_role).await),
        ValidationError::InvalidRole { .. }
    ));

    let mut bad_phone = input("abc", "abc@club.com");
    bad_phone.profile.phone = Some("123".to_string());
    assert_eq!(
        validation_error(service.create(bad_phone).await).to_string(),
        "Phone must be at least 7 characters"
    );
}

#[tokio::test]
async fn test_create_rejects_duplicates() {
    let service = service();
    service.create(input("ana", "ana@club.com")).await.unwrap();

    let error = validation_error(service.create(input("ana", "other@club.com")).await);
    assert_eq!(error.to_string(), "Username already in use");
    assert!(error.is_conflict());

    let error = validation_error(service.create(input("other", "ANA@club.com")).await);
    assert_eq!(error.to_string(), "Email already in use");
}

#[tokio::test]
async fn test_create_with_profile_and_role() {
    let service = service();
    let mut data = input("coach", "coach@club.com");
    data.role = Some("manager".to_string());
    data.profile = ProfileInput {
        name: Some("Toni".to_string()),
        last_name: Some("  ".to_string()),
        phone: Some("5551234".to_string()),
        address: None,
        gender: Some("male".to_string()),
    };

    let user = service.create(data).await.unwrap();
    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.profile.name.as_deref(), Some("Toni"));
    assert_eq!(user.profile.last_name, None);
    assert_eq!(user.profile.gender, Some(Gender::Male));
    assert_eq!(user.full_name(), "Toni");
}

#[tokio::test]
async fn test_update_applies_changes() {
    let service = service();
    let user = service.create(input("ana", "ana@club.com")).await.unwrap();

    let updated = service
        .update(
            user.id,
            UserChanges {
                email: Some("ana.new@club.com".to_string()),
                role: Some("manager".to_string()),
                password: Some("newsecret".to_string()),
                profile: ProfileInput {
                    address: Some("Court 3".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "ana.new@club.com");
    assert_eq!(updated.role, Role::Manager);
    assert_eq!(updated.profile.address.as_deref(), Some("Court 3"));
    assert!(service.hasher().verify("newsecret", &updated.password_hash));
}

#[tokio::test]
async fn test_update_allows_keeping_own_username() {
    let service = service();
    let user = service.create(input("ana", "ana@club.com")).await.unwrap();

    let updated = service
        .update(
            user.id,
            UserChanges {
                username: Some("ana".to_string()),
                email: Some("ana@club.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.username, "ana");
}

#[tokio::test]
async fn test_update_rejects_taken_username() {
    let service = service();
    service.create(input("ana", "ana@club.com")).await.unwrap();
    let bea = service.create(input("bea", "bea@club.com")).await.unwrap();

    let error = validation_error(
        service
            .update(
                bea.id,
                UserChanges {
                    username: Some("ana".to_string()),
                    ..Default::default()
                },
            )
            .await,
    );
    assert!(error.is_conflict());
}

#[tokio::test]
async fn test_update_missing_user() {
    let service = service();
    let result = service.update(42, UserChanges::default()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_set_password_validates_length() {
    let service = service();
    let user = service.create(input("ana", "ana@club.com")).await.unwrap();

    let error = validation_error(service.set_password(user.id, "123").await);
    assert!(matches!(error, ValidationError::TooShort { .. }));

    let updated = service.set_password(user.id, "another1").await.unwrap();
    assert!(service.hasher().verify("another1", &updated.password_hash));
    assert!(matches!(
        service.set_password(user.id + 1, "another1").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_and_count() {
    let service = service();
    let user = service.create(input("ana", "ana@club.com")).await.unwrap();
    assert_eq!(service.count(None).await.unwrap(), 1);

    service.delete(user.id).await.unwrap();
    assert_eq!(service.count(None).await.unwrap(), 0);
    assert!(matches!(
        service.delete(user.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[test]
fn test_privileged_fields() {
    assert!(!UserChanges::default().touches_privileged_fields());
    assert!(UserChanges {
        is_active: Some(false),
        ..Default::default()
    }
    .touches_privileged_fields());
}

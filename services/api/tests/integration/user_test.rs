use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

use bistro_api::error::ApiServiceError;
use bistro_api::usecase::access::{RequireAdminUseCase, ensure_self};
use bistro_api::usecase::token::IssueTokenUseCase;
use bistro_api::usecase::user::{RegisterUserInput, RegisterUserUseCase};
use bistro_auth_types::bearer::authenticate_bearer;
use bistro_domain::user::UserRole;

use crate::helpers::{InMemoryUserRepo, TEST_JWT_SECRET, test_user};

// ── Idempotent registration ──────────────────────────────────────────────────

#[tokio::test]
async fn should_register_an_email_once_and_report_no_id_on_the_second_call() {
    let repo = InMemoryUserRepo::empty();
    let users = repo.users_handle();
    let usecase = RegisterUserUseCase { repo };

    let input = || RegisterUserInput {
        name: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
    };

    let first = usecase.execute(input()).await.unwrap();
    let second = usecase.execute(input()).await.unwrap();

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(users.lock().unwrap().len(), 1);
}

// ── Role checks ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_authorize_stored_admins_only() {
    let repo = InMemoryUserRepo::new(vec![
        test_user("admin@example.com", UserRole::Admin),
        test_user("customer@example.com", UserRole::Customer),
    ]);

    let usecase = RequireAdminUseCase { repo };
    assert!(usecase.execute("admin@example.com").await.is_ok());
    assert!(matches!(
        usecase.execute("customer@example.com").await,
        Err(ApiServiceError::Forbidden)
    ));
    assert!(matches!(
        usecase.execute("nobody@example.com").await,
        Err(ApiServiceError::Forbidden)
    ));
}

// ── Self-scoped access ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_access_to_another_callers_resources() {
    // The guard runs before any store access, so the rejection is identical
    // whether or not data exists under the other email.
    let result = ensure_self("me@example.com", "other@example.com");
    assert!(matches!(result, Err(ApiServiceError::Forbidden)));

    assert!(ensure_self("me@example.com", "me@example.com").is_ok());
}

// ── Token round trip ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_a_token_that_authenticates_an_admin_end_to_end() {
    let repo = InMemoryUserRepo::new(vec![test_user("admin@example.com", UserRole::Admin)]);
    let users = repo.users_handle();

    let issue = IssueTokenUseCase {
        repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = issue.execute("admin@example.com").await.unwrap();

    // Present the token the way a client would.
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", out.token)).unwrap(),
    );
    let identity = authenticate_bearer(&headers, TEST_JWT_SECRET).unwrap();
    assert_eq!(identity.email, "admin@example.com");

    // The verified identity passes the stored-record admin check.
    let require = RequireAdminUseCase {
        repo: InMemoryUserRepo::new(users.lock().unwrap().clone()),
    };
    assert!(require.execute(&identity.email).await.is_ok());
}

#[tokio::test]
async fn should_reject_a_token_signed_with_another_secret() {
    let issue = IssueTokenUseCase {
        repo: InMemoryUserRepo::empty(),
        jwt_secret: "some-other-secret".to_owned(),
    };
    let out = issue.execute("me@example.com").await.unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", out.token)).unwrap(),
    );
    assert!(authenticate_bearer(&headers, TEST_JWT_SECRET).is_err());
}

//! Sign-in flows against the in-memory directory.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use auth_flows_lib::client::AuthCollaborator;
use auth_flows_lib::directory::{DirectorySeed, InMemoryDirectory};
use auth_flows_lib::forms::{LoginForm, LoginOutcome, PasswordChangeForm, PasswordChangeOutcome};
use auth_flows_lib::notify::{NoticeLog, Severity};
use common::NoticeConfig;

fn seed_json() -> String {
    let expired = (Utc::now() - chrono::Duration::days(2)).to_rfc3339();
    format!(
        r#"{{
            "daycares": [
                {{ "name": "Little Acorns", "code": "ACORN1", "subscription_status": "active" }},
                {{ "name": "Old Oak", "code": "OAK999", "subscription_status": "trial",
                   "trial_ends_at": "{expired}" }}
            ],
            "users": [
                {{ "username": "root", "password": "rootroot", "role": "super_admin" }},
                {{ "username": "Maria", "email": "maria@acorns.test", "password": "welcome1",
                   "daycare_code": "ACORN1", "must_change_password": true }},
                {{ "username": "ollie", "password": "ollie123", "daycare_code": "OAK999" }}
            ]
        }}"#
    )
}

fn setup() -> (Arc<InMemoryDirectory>, NoticeLog) {
    let seed = DirectorySeed::from_json(&seed_json()).unwrap();
    let directory = Arc::new(InMemoryDirectory::from_seed(seed).unwrap());
    (directory, NoticeLog::new())
}

fn login_form(directory: &Arc<InMemoryDirectory>, log: &NoticeLog) -> LoginForm {
    LoginForm::new(
        directory.clone(),
        Arc::new(log.clone()),
        NoticeConfig::default(),
    )
}

#[tokio::test]
async fn test_forced_password_change_round_trip() {
    let (directory, log) = setup();

    let mut login = login_form(&directory, &log);
    login.set_organization_code("acorn1");
    login.set_username("maria@acorns.test");
    login.set_password("welcome1");

    let outcome = login.submit().await;
    assert_eq!(
        outcome,
        LoginOutcome::SignedIn {
            organization_name: Some("Little Acorns".to_string())
        }
    );
    assert_eq!(log.last().unwrap().message, "Welcome to Little Acorns!");

    let current = directory.current_user().unwrap();
    assert!(current.must_change_password);

    let mut change = PasswordChangeForm::new(directory.clone(), Arc::new(log.clone()));

    // Reusing the temporary password is refused
    change.set_new_password("welcome1");
    change.set_confirmation("welcome1");
    assert!(matches!(
        change.submit().await,
        PasswordChangeOutcome::Rejected(_)
    ));

    change.set_new_password("acornsRock2");
    change.set_confirmation("acornsRock2");
    assert_eq!(change.submit().await, PasswordChangeOutcome::Changed);
    assert!(!directory.current_user().unwrap().must_change_password);

    // Old password no longer works, new one does
    directory.logout().unwrap();
    let mut again = login_form(&directory, &log);
    again.set_organization_code("ACORN1");
    again.set_username("maria");
    again.set_password("welcome1");
    assert_eq!(again.submit().await, LoginOutcome::InvalidCredentials);

    again.set_password("acornsRock2");
    assert!(matches!(again.submit().await, LoginOutcome::SignedIn { .. }));
}

#[tokio::test]
async fn test_expired_trial_blocks_login() {
    let (directory, log) = setup();

    let mut login = login_form(&directory, &log);
    login.set_organization_code("oak999");
    login.set_username("ollie");
    login.set_password("ollie123");

    let outcome = login.submit().await;
    assert_eq!(
        outcome,
        LoginOutcome::TrialExpired {
            organization_name: Some("Old Oak".to_string())
        }
    );

    let notice = log.last().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(
        notice.message,
        "The free trial for Old Oak has expired. Contact GDI Digital Solutions to activate your subscription."
    );
    assert_eq!(notice.duration, Some(Duration::from_millis(8000)));
    assert!(directory.current_user().is_none());
}

#[tokio::test]
async fn test_super_admin_without_code() {
    let (directory, log) = setup();

    let mut login = login_form(&directory, &log);
    login.set_username("root");
    login.set_password("rootroot");

    assert_eq!(
        login.submit().await,
        LoginOutcome::SignedIn {
            organization_name: None
        }
    );
    assert_eq!(log.last().unwrap().message, "Login successful!");
}

#[tokio::test]
async fn test_staff_without_code_rejected() {
    let (directory, log) = setup();

    let mut login = login_form(&directory, &log);
    login.set_username("maria");
    login.set_password("welcome1");

    assert_eq!(login.submit().await, LoginOutcome::InvalidCredentials);
    assert!(!login.is_submitting());
}

#[tokio::test]
async fn test_password_change_requires_session() {
    let (directory, log) = setup();

    let mut change = PasswordChangeForm::new(directory, Arc::new(log.clone()));
    change.set_new_password("brandnew99");
    change.set_confirmation("brandnew99");

    assert!(matches!(
        change.submit().await,
        PasswordChangeOutcome::Rejected(_)
    ));
    assert_eq!(
        log.last().unwrap().message,
        "You must be signed in to change your password"
    );
}

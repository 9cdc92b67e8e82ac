use serde_json::json;

use super::common::*;
use crate::board::error::BoardError;
use crate::board::users::{LoginPayload, ProfileUpdate, RegisterPayload, UserId, UserRole};
use crate::board::views::BoardView;

fn registration(username: &str, role: &str) -> RegisterPayload {
    let mut payload = user_payload(username, role);
    payload["confirmPassword"] = json!("s3cret-pass");
    RegisterPayload::from_json(&payload).expect("valid registration")
}

#[test]
fn registration_applies_role_approval_defaults() {
    let (board, _) = build_board();

    let seeker = board
        .accounts
        .register(registration("casey", "jobseeker"))
        .expect("seeker registers");
    assert!(seeker.record.is_approved);
    assert!(!seeker.refresh.contains(&BoardView::AdminPendingEmployers));

    let employer = board
        .accounts
        .register(registration("acme", "employer"))
        .expect("employer registers");
    assert!(!employer.record.is_approved);
    assert!(employer.refresh.contains(&BoardView::AdminPendingEmployers));
}

#[test]
fn registration_hashes_the_password_and_login_verifies_it() {
    let (board, _) = build_board();
    let created = board
        .accounts
        .register(registration("casey", "jobseeker"))
        .expect("registers");

    let stored = board.accounts.get(created.record.id).expect("stored");
    assert_ne!(stored.password, "s3cret-pass");

    let login = LoginPayload {
        username: "casey".to_string(),
        password: "s3cret-pass".to_string(),
    };
    let user = board.accounts.login(login).expect("login succeeds");
    assert_eq!(user.id, created.record.id);

    let wrong = LoginPayload {
        username: "casey".to_string(),
        password: "wrong-pass".to_string(),
    };
    assert!(matches!(
        board.accounts.login(wrong),
        Err(BoardError::InvalidCredentials)
    ));
}

#[test]
fn unknown_username_is_indistinguishable_from_bad_password() {
    let (board, _) = build_board();
    let login = LoginPayload {
        username: "ghost".to_string(),
        password: "whatever".to_string(),
    };
    assert!(matches!(
        board.accounts.login(login),
        Err(BoardError::InvalidCredentials)
    ));
}

#[test]
fn duplicate_username_and_email_are_field_errors() {
    let (board, store) = build_board();
    seed_seeker(&store, "casey");

    let error = board
        .accounts
        .register(registration("casey", "jobseeker"))
        .expect_err("duplicate account");
    match error {
        BoardError::Validation(errors) => {
            assert_eq!(errors.message_for("username"), Some("Username already exists"));
            assert_eq!(errors.message_for("email"), Some("Email already registered"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn profile_update_changes_only_supplied_fields() {
    let (board, store) = build_board();
    let seeker = seed_seeker(&store, "casey");

    let update = ProfileUpdate::from_json(&json!({
        "location": "Porto",
        "skills": ["rust", "sql"],
    }))
    .expect("valid update");
    let mutation = board
        .accounts
        .update_profile(seeker.id, update)
        .expect("profile updated");

    assert_eq!(mutation.record.location.as_deref(), Some("Porto"));
    assert_eq!(mutation.record.skills, vec!["rust", "sql"]);
    assert_eq!(mutation.record.name, seeker.name);
    assert!(mutation.refresh.contains(&BoardView::Profile(seeker.id)));
}

#[test]
fn empty_profile_update_is_a_noop() {
    let (board, store) = build_board();
    let seeker = seed_seeker(&store, "casey");

    let mutation = board
        .accounts
        .update_profile(seeker.id, ProfileUpdate::default())
        .expect("noop update");
    assert!(mutation.is_noop());
}

#[test]
fn profile_update_rejects_taken_email_and_company_for_seekers() {
    let (board, store) = build_board();
    let seeker = seed_seeker(&store, "casey");
    seed_seeker(&store, "robin");

    let update = ProfileUpdate::from_json(&json!({
        "email": "robin@example.com",
        "companyName": "Side Hustle",
    }))
    .expect("well-formed update");
    match board.accounts.update_profile(seeker.id, update) {
        Err(BoardError::Validation(errors)) => {
            assert!(errors.has("email"));
            assert!(errors.has("companyName"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn unknown_caller_is_unauthenticated() {
    let (board, _) = build_board();
    assert!(matches!(
        board.accounts.resolve_actor(UserId(404)),
        Err(BoardError::Unauthenticated)
    ));
    assert!(matches!(
        board.accounts.get(UserId(404)),
        Err(BoardError::NotFound { .. })
    ));
}

#[test]
fn profile_completion_scores_role_fields() {
    let (board, store) = build_board();
    let employer = seed_user(&store, "acme", UserRole::Employer, true);

    let completion = board
        .accounts
        .profile_completion(employer.id)
        .expect("completion computed");
    // name, email, companyName filled; location and bio missing.
    assert_eq!(completion.percent, 60);
    assert_eq!(completion.missing_fields, vec!["location", "bio"]);
}

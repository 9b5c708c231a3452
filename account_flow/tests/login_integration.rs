//! Integration tests for the login flow.
//!
//! Users are seeded through the signup flow so the stored hashes are real.

use account_flow::auth::AuthorityLevel;
use account_flow::login::{LoginEvent, LoginField, LoginFlow, LoginTransition};
use account_flow::signup::{Modal, SignupEvent, SignupFlow, SignupInput, SignupTransition};
use account_flow::store::{MemoryStore, current_session};
use account_flow::{FlowConfig, KeyValueStore, UserRecord};

const EMAIL: &str = "park@school.kr";
const PASSWORD: &str = "qwer1234!";

/// Helper to seed a store with one registered parent account
fn seeded_store() -> MemoryStore {
    let mut flow = SignupFlow::new(MemoryStore::new(), FlowConfig::development()).unwrap();
    let events = vec![
        SignupEvent::SelectAuthority(AuthorityLevel::Parent),
        SignupEvent::Input(SignupInput::Email, EMAIL.to_string()),
        SignupEvent::Input(SignupInput::Pw, PASSWORD.to_string()),
        SignupEvent::Input(SignupInput::PwCheck, PASSWORD.to_string()),
        SignupEvent::Input(SignupInput::Name, "박부모".to_string()),
        SignupEvent::OpenModal(Modal::Address),
        SignupEvent::AddressSelected("부산시 해운대구".to_string()),
        SignupEvent::Input(SignupInput::DetailAddress, "3층".to_string()),
        SignupEvent::CardNumberSelected("4444333322221111".to_string()),
        SignupEvent::Input(SignupInput::DateOfBirth, "790312".to_string()),
        SignupEvent::CheckDuplicateEmail,
    ];
    for event in events {
        flow.dispatch(event).expect("Seeding event should not fail");
    }

    let result = flow.dispatch(SignupEvent::Submit).unwrap();
    assert!(
        matches!(result, SignupTransition::Registered(_)),
        "Seeding registration should succeed, got {result:?}"
    );
    flow.into_store()
}

/// Helper to run a full login attempt
fn attempt(flow: &mut LoginFlow<MemoryStore>, email: &str, pw: &str) -> LoginTransition {
    flow.dispatch(LoginEvent::Input(LoginField::Email, email.to_string()))
        .unwrap();
    flow.dispatch(LoginEvent::Input(LoginField::Pw, pw.to_string()))
        .unwrap();
    flow.dispatch(LoginEvent::Submit).unwrap()
}

#[test]
fn test_login_success_writes_session() {
    let mut flow = LoginFlow::new(seeded_store(), FlowConfig::development()).unwrap();

    let result = attempt(&mut flow, EMAIL, PASSWORD);
    let LoginTransition::Authenticated { session, redirect } = result else {
        panic!("Expected authentication, got {result:?}");
    };

    assert_eq!(redirect, "/");
    assert_eq!(session.user.email, EMAIL);
    assert_eq!(session.user.authority, AuthorityLevel::Parent);
    assert!(!flow.state().unknown_user);

    let stored = current_session(flow.store(), "loggedInUser")
        .unwrap()
        .expect("Session record should be stored");
    assert_eq!(stored, session);

    let raw = flow.store().load("loggedInUser").unwrap().unwrap();
    assert_eq!(raw["email"], EMAIL);
    assert!(raw.get("loggedInAt").is_some());
}

#[test]
fn test_login_unknown_email() {
    let mut flow = LoginFlow::new(seeded_store(), FlowConfig::development()).unwrap();

    assert_eq!(
        attempt(&mut flow, "nobody@school.kr", PASSWORD),
        LoginTransition::UnknownUser
    );
    assert!(flow.state().unknown_user);
    assert!(flow.state().unknown_user_message().is_some());
    assert_eq!(current_session(flow.store(), "loggedInUser").unwrap(), None);
}

#[test]
fn test_login_empty_store() {
    let mut flow = LoginFlow::new(MemoryStore::new(), FlowConfig::development()).unwrap();

    assert_eq!(attempt(&mut flow, EMAIL, PASSWORD), LoginTransition::UnknownUser);
    assert!(flow.store().is_empty(), "No session should be written");
}

#[test]
fn test_login_wrong_password() {
    let mut flow = LoginFlow::new(seeded_store(), FlowConfig::development()).unwrap();

    assert_eq!(
        attempt(&mut flow, EMAIL, "qwer1234?"),
        LoginTransition::UnknownUser
    );
    assert_eq!(current_session(flow.store(), "loggedInUser").unwrap(), None);
}

#[test]
fn test_login_never_compares_plaintext() {
    let mut store = MemoryStore::new();
    let plain = UserRecord {
        id: 1,
        authority: AuthorityLevel::Teacher,
        email: EMAIL.to_string(),
        pw: PASSWORD.to_string(),
        name: "Kim".to_string(),
        address: "Seoul".to_string(),
        detail_address: "1F".to_string(),
        credit_card_num: "1111222233334444".to_string(),
        date_of_birth: "800101".to_string(),
    };
    account_flow::store::append_user(&mut store, "users", plain).unwrap();

    let mut flow = LoginFlow::new(store, FlowConfig::development()).unwrap();
    assert_eq!(
        attempt(&mut flow, EMAIL, PASSWORD),
        LoginTransition::UnknownUser
    );
}

#[test]
fn test_retry_clears_unknown_user() {
    let mut flow = LoginFlow::new(seeded_store(), FlowConfig::development()).unwrap();

    attempt(&mut flow, EMAIL, "wrong-pass1!");
    assert!(flow.state().unknown_user);

    assert!(matches!(
        attempt(&mut flow, EMAIL, PASSWORD),
        LoginTransition::Authenticated { .. }
    ));
    assert!(!flow.state().unknown_user);
}

#[test]
fn test_invalid_form_has_no_other_effect() {
    let mut flow = LoginFlow::new(seeded_store(), FlowConfig::development()).unwrap();

    assert_eq!(
        attempt(&mut flow, "park-at-school", PASSWORD),
        LoginTransition::Rejected(vec![LoginField::Email])
    );
    assert!(!flow.state().unknown_user);
    assert_eq!(current_session(flow.store(), "loggedInUser").unwrap(), None);
}

#[test]
fn test_custom_home_path() {
    let config = FlowConfig {
        home_path: "/classroom".to_string(),
        ..FlowConfig::development()
    };
    let mut flow = LoginFlow::new(seeded_store(), config).unwrap();

    let LoginTransition::Authenticated { redirect, .. } = attempt(&mut flow, EMAIL, PASSWORD) else {
        panic!("Login should succeed");
    };
    assert_eq!(redirect, "/classroom");
}

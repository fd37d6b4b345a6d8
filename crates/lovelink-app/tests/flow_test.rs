/// Integration test: drive the whole core end to end against an in-memory
/// store. Register, like both ways, chat, wait out the scripted reply, then
/// file a review and a contact message.
use std::sync::Arc;
use std::time::Duration;

use lovelink_app::{App, AppError};
use lovelink_db::Store;
use lovelink_types::api::{LoginRequest, RegisterRequest};

fn test_app() -> App {
    App::new(Arc::new(Store::open_in_memory().unwrap())).with_reply_delay_ms(1..=5)
}

fn request(email: &str, name: &str, age: u32, interests: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.into(),
        name: name.into(),
        password: "1234".into(),
        age,
        gender: "other".into(),
        interests: interests.into(),
        city: None,
        bio: None,
    }
}

#[tokio::test]
async fn mutual_interest_unlocks_chat_and_the_reply_arrives() {
    let app = test_app();
    app.register(request("a@x", "A", 24, "hiking, coffee")).unwrap();
    app.register(request("b@x", "B", 26, "hiking, ramen")).unwrap();

    // One-directional interest is not a match.
    app.express_interest("a@x", "b@x").unwrap();
    assert!(!app.is_match("a@x", "b@x").unwrap());
    assert!(app.matches_for("a@x").unwrap().is_empty());

    app.express_interest("b@x", "a@x").unwrap();
    assert!(app.is_match("a@x", "b@x").unwrap());
    let matches = app.matches_for("a@x").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].email, "b@x");

    app.send_message("a@x", "b@x", "a@x", "hi").unwrap();
    let log = app.messages("a@x", "b@x").unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].sender, "a@x");
    assert_eq!(log[0].text, "hi");

    // The scripted counterpart answers after its delay, strictly after the
    // trigger.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let log = app.messages("b@x", "a@x").unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].sender, "b@x");
    assert!(log[1].sent_at >= log[0].sent_at);
}

#[tokio::test]
async fn registration_enforces_email_uniqueness() {
    let app = test_app();
    app.register(request("a@x", "A", 24, "")).unwrap();

    let result = app.register(request("a@x", "Imposter", 30, ""));
    assert!(matches!(result, Err(AppError::EmailTaken)));
    assert_eq!(app.all_users().unwrap().len(), 1);
}

#[tokio::test]
async fn sessions_follow_sign_in_and_out() {
    let app = test_app();
    let user = app.register(request("a@x", "A", 24, "")).unwrap();

    // Registration signs the account in.
    assert_eq!(app.current_session().unwrap().unwrap().email, user.email);

    app.sign_out().unwrap();
    assert!(app.current_session().unwrap().is_none());

    let bad = app.sign_in(&LoginRequest {
        email: "a@x".into(),
        password: "wrong".into(),
    });
    assert!(matches!(bad, Err(AppError::InvalidCredentials)));
    assert!(app.current_session().unwrap().is_none());

    let session = app
        .sign_in(&LoginRequest {
            email: "a@x".into(),
            password: "1234".into(),
        })
        .unwrap();
    assert_eq!(session.email, "a@x");
}

#[tokio::test]
async fn suggestions_reflect_shared_interests_and_age() {
    let app = test_app();
    app.seed_demo_users().unwrap();

    let ranked = app.suggestions_for("ava@example.com").unwrap();
    assert_eq!(ranked.len(), 5);

    // Daniel shares hiking and jazz with Ava at a five-year gap:
    // 2 × 20 + (20 − 5) = 55, the best score in the seed set.
    assert_eq!(ranked[0].user.email, "daniel@example.com");
    assert_eq!(ranked[0].score, 55);
    assert_eq!(
        ranked[0].reason,
        "Shared interests: hiking, jazz; age gap 5"
    );

    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[tokio::test]
async fn review_and_contact_feeds_are_newest_first() {
    let app = test_app();

    app.submit_review("ben@example.com", 4, "Fun to talk to.").unwrap();
    app.submit_review("ava@example.com", 5, "Great hikes!").unwrap();
    let reviews = app.recent_reviews(20).unwrap();
    assert_eq!(reviews[0].target, "ava@example.com");
    assert_eq!(reviews[1].target, "ben@example.com");

    app.submit_contact("a@x", "feedback", "Nice demo.").unwrap();
    app.submit_contact("b@x", "support", "How do I reset?").unwrap();
    let contacts = app.recent_contacts(10).unwrap();
    assert_eq!(contacts[0].email, "b@x");
    assert_eq!(contacts[1].email, "a@x");
}

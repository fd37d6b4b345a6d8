//! Scripted stand-in for the missing view layer: seeds the demo profiles,
//! signs in, browses, matches, chats, and narrates every step through
//! tracing.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use lovelink_app::App;
use lovelink_db::Store;
use lovelink_types::api::{CatalogFilter, LoginRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lovelink=info".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("LOVELINK_DB_PATH").unwrap_or_else(|_| "lovelink.db".into());

    let store = Arc::new(Store::open(&PathBuf::from(&db_path))?);
    let app = App::new(store);

    app.seed_demo_users()?;

    let session = app.sign_in(&LoginRequest {
        email: "ava@example.com".into(),
        password: "1234".into(),
    })?;

    let catalog = app.catalog(&CatalogFilter {
        interest_query: Some("jazz".into()),
        ..CatalogFilter::default()
    })?;
    for user in &catalog {
        info!("Catalog hit: {} ({}, {})", user.name, user.age, user.gender);
    }

    for suggestion in app.suggestions_for(&session.email)? {
        info!(
            "Suggested {} with score {} ({})",
            suggestion.user.name, suggestion.score, suggestion.reason
        );
    }

    app.express_interest(&session.email, "daniel@example.com")?;
    app.express_interest("daniel@example.com", &session.email)?;
    if app.is_match(&session.email, "daniel@example.com")? {
        info!("Matched with daniel@example.com, chat unlocked");
    }

    app.send_message(
        &session.email,
        "daniel@example.com",
        &session.email,
        "Hey! Coffee this weekend?",
    )?;

    // Give the scripted counterpart time to answer before reading the log.
    tokio::time::sleep(Duration::from_millis(2_000)).await;
    for message in app.messages(&session.email, "daniel@example.com")? {
        info!(
            "[{}] {}: {}",
            message.sent_at.format("%H:%M:%S"),
            message.sender,
            message.text
        );
    }

    app.submit_review("daniel@example.com", 5, "Great conversation starter.")?;
    for review in app.recent_reviews(20)? {
        info!("Review of {}: {}/5, {}", review.target, review.rating, review.comment);
    }

    app.submit_contact("ava@example.com", "feedback", "Love the demo!")?;
    for contact in app.recent_contacts(10)? {
        info!("Contact from {} [{}]: {}", contact.email, contact.topic, contact.body);
    }

    app.sign_out()?;
    info!("Signed out");
    Ok(())
}

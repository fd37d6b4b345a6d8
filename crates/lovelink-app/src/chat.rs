use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::warn;

use lovelink_db::keys;
use lovelink_types::models::Message;

use crate::{App, AppError, Result};

/// Canned text appended by the scripted counterpart.
const AUTO_REPLY_TEXT: &str = "🤖 Auto-reply: thanks for your message!";

/// Conversation logs keyed by [`conversation_key`].
type MessageMap = HashMap<String, Vec<Message>>;

/// Order-independent key for a two-party log: the emails sorted
/// lexicographically and joined, so both participants resolve to the same
/// conversation no matter who opened it.
pub fn conversation_key(a: &str, b: &str) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}::{hi}")
}

impl App {
    /// Append `text` from `sender` to the log shared by `a` and `b`, then
    /// schedule the scripted reply. Text that is empty after trimming is
    /// declined and the log stays untouched.
    ///
    /// Must be called from within a tokio runtime: the reply task is spawned
    /// on it. The sender never awaits that task; the reply shows up only in
    /// a later read of the log.
    pub fn send_message(&self, a: &str, b: &str, sender: &str, text: &str) -> Result<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let key = conversation_key(a, b);
        let message = Message {
            sender: sender.to_string(),
            text: text.to_string(),
            sent_at: Utc::now(),
        };
        self.append(&key, message.clone())?;

        let counterpart = if sender == a { b } else { a };
        self.schedule_auto_reply(key, counterpart.to_string());

        Ok(message)
    }

    /// Full log for the pair, oldest first; empty when they have never
    /// spoken. Log order equals append order.
    pub fn messages(&self, a: &str, b: &str) -> Result<Vec<Message>> {
        let logs: MessageMap = self.store.get(keys::MESSAGES, MessageMap::new())?;
        Ok(logs
            .get(&conversation_key(a, b))
            .cloned()
            .unwrap_or_default())
    }

    fn append(&self, key: &str, message: Message) -> Result<()> {
        let mut logs: MessageMap = self.store.get(keys::MESSAGES, MessageMap::new())?;
        logs.entry(key.to_string()).or_default().push(message);
        self.store.set(keys::MESSAGES, &logs)?;
        Ok(())
    }

    /// Fire-and-forget: the detached task sleeps a random delay, then
    /// appends the canned line as the counterpart. No handle is returned and
    /// nothing cancels it mid-flight; reading the log before the delay
    /// elapses simply finds the reply absent.
    fn schedule_auto_reply(&self, key: String, counterpart: String) {
        let app = self.clone();
        let delay_ms = rand::rng().random_range(self.reply_delay_ms.clone());
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            let reply = Message {
                sender: counterpart,
                text: AUTO_REPLY_TEXT.to_string(),
                sent_at: Utc::now(),
            };
            if let Err(e) = app.append(&key, reply) {
                warn!("Auto-reply append failed for '{}': {}", key, e);
            }
        });
    }
}

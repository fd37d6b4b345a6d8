use tracing::info;

use lovelink_db::keys;
use lovelink_types::api::{LoginRequest, RegisterRequest};
use lovelink_types::models::{Session, User};

use crate::{App, AppError, Result};

impl App {
    /// Create an account. The email is the natural key; registering it twice
    /// is declined. The new account is signed in immediately.
    pub fn register(&self, req: RegisterRequest) -> Result<User> {
        let mut users: Vec<User> = self.store.get(keys::USERS, Vec::new())?;
        if users.iter().any(|u| u.email == req.email) {
            return Err(AppError::EmailTaken);
        }

        let user = User {
            email: req.email,
            name: req.name,
            password: req.password,
            age: req.age,
            gender: req.gender,
            interests: req.interests,
            city: req.city,
            bio: req.bio,
        };
        users.push(user.clone());
        self.store.set(keys::USERS, &users)?;
        self.store.set(
            keys::SESSION,
            &Session {
                email: user.email.clone(),
            },
        )?;

        info!("Registered {}", user.email);
        Ok(user)
    }

    /// Plaintext credential comparison against the stored profile. This
    /// core has no real authentication.
    pub fn sign_in(&self, req: &LoginRequest) -> Result<Session> {
        let users: Vec<User> = self.store.get(keys::USERS, Vec::new())?;
        let user = users
            .iter()
            .find(|u| u.email == req.email && u.password == req.password)
            .ok_or(AppError::InvalidCredentials)?;

        let session = Session {
            email: user.email.clone(),
        };
        self.store.set(keys::SESSION, &session)?;

        info!("Signed in {}", session.email);
        Ok(session)
    }

    /// Drop the stored session. Idempotent.
    pub fn sign_out(&self) -> Result<()> {
        self.store.remove(keys::SESSION)?;
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.store.get(keys::SESSION, None)?)
    }
}

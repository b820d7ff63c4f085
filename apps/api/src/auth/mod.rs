//! Mock authentication — a stand-in for a real identity provider.
//!
//! Any non-empty email with a password of at least six characters signs in.
//! The signed-in user lives in the session slot until logout.

pub mod extractor;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::User;
use crate::storage::{read_json, write_json, SlotStorage, StorageError};

pub use extractor::CurrentUser;

/// Slot holding the signed-in user, if any.
pub const SESSION_SLOT: &str = "job-tracker-user";

const MIN_PASSWORD_LEN: usize = 6;
/// The mock backend has exactly one account.
const MOCK_USER_ID: Uuid = Uuid::from_u128(1);

pub struct AuthService {
    slots: Arc<dyn SlotStorage>,
    delay: Duration,
}

impl AuthService {
    pub fn new(slots: Arc<dyn SlotStorage>, delay: Duration) -> Self {
        Self { slots, delay }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        tokio::time::sleep(self.delay).await;

        if !credentials_ok(email, password) {
            info!("Mock login rejected");
            return Err(AppError::Unauthorized);
        }
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.start_session(email, name)
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, AppError> {
        tokio::time::sleep(self.delay).await;

        if !credentials_ok(email, password) || name.trim().is_empty() {
            info!("Mock registration rejected");
            return Err(AppError::Unauthorized);
        }
        self.start_session(email, name.to_string())
    }

    /// The session user, or `None` when signed out. An unreadable session
    /// counts as signed out and is cleared.
    pub fn current_user(&self) -> Result<Option<User>, StorageError> {
        match read_json(self.slots.as_ref(), SESSION_SLOT) {
            Err(StorageError::Corrupt { .. }) => {
                warn!("Session slot is unreadable; clearing it");
                self.slots.remove(SESSION_SLOT)?;
                Ok(None)
            }
            other => other,
        }
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.slots.remove(SESSION_SLOT)?;
        info!("Signed out");
        Ok(())
    }

    fn start_session(&self, email: &str, name: String) -> Result<User, AppError> {
        let user = User {
            id: MOCK_USER_ID,
            email: email.to_string(),
            name,
            created_at: Utc::now(),
        };
        write_json(self.slots.as_ref(), SESSION_SLOT, &user)?;
        info!("Signed in as {}", user.email);
        Ok(user)
    }
}

fn credentials_ok(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && password.chars().count() >= MIN_PASSWORD_LEN
}

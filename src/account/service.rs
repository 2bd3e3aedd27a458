use crate::account::store::{BlobStore, StoreError};
use crate::account::user::{
    obfuscate_password, sanitize_input, validate_email, validate_password, PasswordError, User,
};
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

/// Blob key holding the registered-user list.
pub const USERS_KEY: &str = "wiremit_users";
/// Blob key holding the logged-in user record.
pub const CURRENT_USER_KEY: &str = "wiremit_current_user";

/// Errors from sign-up, login, and session handling.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("all fields are required")]
    MissingFields,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error(transparent)]
    WeakPassword(#[from] PasswordError),
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("no account found with this email address")]
    UnknownEmail,
    #[error("incorrect password")]
    WrongPassword,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registration and session role-play over an injected blob store.
///
/// This mirrors what the product front-end does against browser local
/// storage: whole-list reads and writes under [`USERS_KEY`], and a single
/// record under [`CURRENT_USER_KEY`]. The service itself holds no state
/// beyond the store handle, and nothing here is real security (see
/// [`obfuscate_password`]).
pub struct AccountService<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// Name and email are sanitized and the email is lowercased before
    /// any check, so lookups are case-insensitive on the email.
    pub fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        let name = sanitize_input(name.trim());
        let email = sanitize_input(email.trim()).to_lowercase();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }
        if !validate_email(&email) {
            return Err(AccountError::InvalidEmail);
        }
        validate_password(password)?;

        let mut users = self.load_users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(AccountError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
            password_digest: obfuscate_password(password),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        self.save_users(&users)?;
        log::info!("registered account {}", user.email);

        Ok(user)
    }

    /// Authenticate against the stored user list.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        let email = sanitize_input(email.trim()).to_lowercase();

        if email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }
        if !validate_email(&email) {
            return Err(AccountError::InvalidEmail);
        }

        let users = self.load_users()?;
        let user = users
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(AccountError::UnknownEmail)?;

        if user.password_digest != obfuscate_password(password) {
            return Err(AccountError::WrongPassword);
        }

        Ok(user)
    }

    /// The currently logged-in user, if any.
    ///
    /// An unreadable session blob counts as logged out rather than an
    /// error, matching how the front-end tolerates corrupt storage.
    pub fn current_user(&self) -> Result<Option<User>, AccountError> {
        let Some(blob) = self.store.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                log::warn!("discarding unreadable session record: {err}");
                Ok(None)
            }
        }
    }

    /// Record `user` as logged in.
    pub fn set_current_user(&mut self, user: &User) -> Result<(), AccountError> {
        let blob = serde_json::to_string(user).expect("user record serializes");
        self.store.put(CURRENT_USER_KEY, &blob)?;
        Ok(())
    }

    /// Clear the logged-in user.
    pub fn logout(&mut self) -> Result<(), AccountError> {
        self.store.remove(CURRENT_USER_KEY)?;
        Ok(())
    }

    fn load_users(&self) -> Result<Vec<User>, AccountError> {
        let Some(blob) = self.store.get(USERS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(users) => Ok(users),
            Err(err) => {
                log::warn!("discarding unreadable user list: {err}");
                Ok(Vec::new())
            }
        }
    }

    fn save_users(&mut self, users: &[User]) -> Result<(), AccountError> {
        let blob = serde_json::to_string(users).expect("user list serializes");
        self.store.put(USERS_KEY, &blob)?;
        Ok(())
    }
}

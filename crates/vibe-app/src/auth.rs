//! Mock session and the sign-in / sign-up form
//!
//! Nothing here verifies credentials. `login` and `signup` fabricate a
//! [`User`] from the submitted fields and persist it under
//! [`USER_STORAGE_KEY`]; this is not a security boundary.

use vibe_core::prelude::*;
use vibe_core::User;

use crate::storage::KeyValueStore;

/// Storage key of the serialized user record
pub const USER_STORAGE_KEY: &str = "user";

/// Minimum accepted password length on sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// Authenticated-user flag and record, backed by persistent storage
pub struct AuthSession {
    store: Box<dyn KeyValueStore>,
    user: Option<User>,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl AuthSession {
    /// Restore the session saved by a previous run
    ///
    /// Missing or unreadable data yields a signed-out session.
    pub fn rehydrate(store: Box<dyn KeyValueStore>) -> Self {
        let user = match store.get(USER_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    Some(user)
                }
                Err(e) => {
                    warn!("Ignoring unreadable stored user: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read stored session: {}", e);
                None
            }
        };
        Self { store, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Sign in. The password is accepted as-is.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<&User> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name,
            api_key: None,
        };
        self.persist(&user)?;
        info!("Signed in as {}", user.email);
        Ok(self.user.insert(user))
    }

    /// Create an account. The password is accepted as-is.
    pub fn signup(&mut self, email: &str, _password: &str, name: &str) -> Result<&User> {
        let user = User {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            api_key: None,
        };
        self.persist(&user)?;
        info!("Created account for {}", user.email);
        Ok(self.user.insert(user))
    }

    /// Clear the persisted record and the in-memory user
    pub fn logout(&mut self) -> Result<()> {
        let result = self.store.remove(USER_STORAGE_KEY);
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
        result
    }

    /// Merge an API key into the signed-in user; no-op when signed out
    pub fn update_api_key(&mut self, api_key: &str) -> Result<()> {
        let Some(current) = self.user.as_ref() else {
            debug!("update_api_key ignored: no user signed in");
            return Ok(());
        };
        let mut updated = current.clone();
        updated.api_key = Some(api_key.to_string());
        self.persist(&updated)?;
        self.user = Some(updated);
        info!("API key updated");
        Ok(())
    }

    fn persist(&mut self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.store
            .set(USER_STORAGE_KEY, &raw)
            .context("Failed to persist user record")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sign-in / sign-up form
// ─────────────────────────────────────────────────────────────────────────────

/// Which tab of the auth form is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Input fields of the auth form, in focus order per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    LoginEmail,
    LoginPassword,
    SignupName,
    SignupEmail,
    SignupPassword,
    SignupConfirm,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::LoginEmail | AuthField::SignupEmail => "Email Address",
            AuthField::LoginPassword | AuthField::SignupPassword => "Password",
            AuthField::SignupName => "Full Name",
            AuthField::SignupConfirm => "Confirm Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(
            self,
            AuthField::LoginPassword | AuthField::SignupPassword | AuthField::SignupConfirm
        )
    }
}

const LOGIN_FIELDS: [AuthField; 2] = [AuthField::LoginEmail, AuthField::LoginPassword];
const SIGNUP_FIELDS: [AuthField; 4] = [
    AuthField::SignupName,
    AuthField::SignupEmail,
    AuthField::SignupPassword,
    AuthField::SignupConfirm,
];

/// State of the auth screen form
#[derive(Debug, Clone, Default)]
pub struct AuthFormState {
    pub tab: AuthTab,
    pub focus: usize,
    pub show_password: bool,
    pub login_email: String,
    pub login_password: String,
    pub signup_name: String,
    pub signup_email: String,
    pub signup_password: String,
    pub signup_confirm: String,
}

impl AuthFormState {
    pub fn fields(&self) -> &'static [AuthField] {
        match self.tab {
            AuthTab::Login => &LOGIN_FIELDS,
            AuthTab::Signup => &SIGNUP_FIELDS,
        }
    }

    pub fn focused_field(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::Login => AuthTab::Signup,
            AuthTab::Signup => AuthTab::Login,
        };
        self.focus = 0;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn is_last_field(&self) -> bool {
        self.focus + 1 >= self.fields().len()
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::LoginEmail => &self.login_email,
            AuthField::LoginPassword => &self.login_password,
            AuthField::SignupName => &self.signup_name,
            AuthField::SignupEmail => &self.signup_email,
            AuthField::SignupPassword => &self.signup_password,
            AuthField::SignupConfirm => &self.signup_confirm,
        }
    }

    fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::LoginEmail => &mut self.login_email,
            AuthField::LoginPassword => &mut self.login_password,
            AuthField::SignupName => &mut self.signup_name,
            AuthField::SignupEmail => &mut self.signup_email,
            AuthField::SignupPassword => &mut self.signup_password,
            AuthField::SignupConfirm => &mut self.signup_confirm,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused_field();
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        self.value_mut(field).pop();
    }

    /// Check the login fields before calling [`AuthSession::login`]
    pub fn validate_login(&self) -> Result<()> {
        if self.login_email.trim().is_empty() || self.login_password.is_empty() {
            return Err(missing_information());
        }
        Ok(())
    }

    /// Check the sign-up fields before calling [`AuthSession::signup`]
    pub fn validate_signup(&self) -> Result<()> {
        if self.signup_email.trim().is_empty()
            || self.signup_password.is_empty()
            || self.signup_name.trim().is_empty()
        {
            return Err(missing_information());
        }
        if self.signup_password != self.signup_confirm {
            return Err(Error::validation(
                "Password Mismatch",
                "Passwords do not match.",
            ));
        }
        if self.signup_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::validation(
                "Weak Password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters long."),
            ));
        }
        Ok(())
    }

    /// Forget everything typed (after a successful submit)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn missing_information() -> Error {
    Error::validation("Missing Information", "Please fill in all fields.")
}

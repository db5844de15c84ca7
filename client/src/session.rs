//! Authentication/session state.
//!
//! Tracks whether someone is signed in, who they are, and the path they
//! were heading for before being redirected to sign-in. Sign-in failures
//! are a structured value, never a fault, and leave the session untouched.

use tracing::{debug, info};
use validator::ValidationErrors;

use crate::models::{SignInRequest, UserSummary};
use crate::routes;
use crate::services::AuthApi;
use crate::validation;

/// Why sign-in did not complete
#[derive(Debug)]
pub enum SignInFailure {
    /// The form itself was invalid; nothing was sent
    InvalidInput(ValidationErrors),
    /// The remote rejected the attempt or was unreachable
    Rejected(String),
}

impl SignInFailure {
    /// Message fit for a notification
    pub fn message(&self) -> String {
        match self {
            SignInFailure::InvalidInput(_) => "please fix the highlighted fields".to_string(),
            SignInFailure::Rejected(message) => message.clone(),
        }
    }
}

/// Client-side session state
#[derive(Debug, Default)]
pub struct AuthSession {
    user: Option<UserSummary>,
    intended_path: Option<String>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    pub fn intended_path(&self) -> Option<&str> {
        self.intended_path.as_deref()
    }

    /// Remember where the user was heading before the sign-in redirect.
    ///
    /// Paths inside the authentication flow are discarded so a redirect can
    /// never loop back into sign-in/sign-up; whatever was stored before is
    /// kept.
    pub fn remember_intended_path(&mut self, path: &str) {
        if routes::is_auth_path(path) {
            debug!(path, "not recording auth-flow path as intended destination");
            return;
        }
        self.intended_path = Some(path.to_string());
    }

    /// Sign in. On success the session holds the user and the post-login
    /// destination is the stored intended path (consumed) or home. On
    /// failure the session is observably unchanged.
    pub async fn sign_in(
        &mut self,
        credentials: &SignInRequest,
        auth: &dyn AuthApi,
    ) -> Result<String, SignInFailure> {
        if let Err(errors) = validation::signin::validate(credentials) {
            return Err(SignInFailure::InvalidInput(errors));
        }

        let response = auth
            .sign_in(credentials)
            .await
            .map_err(|e| SignInFailure::Rejected(e.to_string()))?;

        info!(user_id = %response.user.id, "signed in");
        self.user = Some(response.user);
        Ok(self.take_post_login_destination())
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.intended_path = None;
    }

    fn take_post_login_destination(&mut self) -> String {
        self.intended_path
            .take()
            .unwrap_or_else(|| crate::routes::Route::Home.to_path())
    }
}

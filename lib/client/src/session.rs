//! Session context — the auth state machine every surface consults.
//!
//! One `Session` exists per running client, constructed at the entry
//! point and passed by handle to whichever surface needs it. States move
//! `Unknown → Anonymous ↔ Authenticated`; a user is present exactly in
//! the `Authenticated` state.

use tracing::warn;

use crate::api::ApiClient;
use crate::error::Result;
use crate::model::{AuthResponse, SignupRequest, User};

/// Authentication state as observed by the surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The startup check has not completed yet.
    Unknown,
    /// No valid user.
    Anonymous,
    /// A user is signed in.
    Authenticated,
}

pub struct Session {
    api: ApiClient,
    user: Option<User>,
    checked: bool,
    loading: bool,
    last_error: Option<String>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: None,
            checked: false,
            loading: false,
            last_error: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True while an auth operation is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed operation, until cleared or replaced.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn state(&self) -> SessionState {
        if self.user.is_some() {
            SessionState::Authenticated
        } else if self.checked {
            SessionState::Anonymous
        } else {
            SessionState::Unknown
        }
    }

    /// Startup check: restore the session behind a stored token, if any.
    ///
    /// With no token on disk this settles to `Anonymous` without touching
    /// the network. A token the server no longer accepts is dropped and
    /// the session settles to `Anonymous` as well.
    pub async fn bootstrap(&mut self) {
        if !self.api.credentials().has_token() {
            self.checked = true;
            return;
        }

        self.loading = true;
        match self.api.current_user().await {
            Ok(user) => self.user = Some(user),
            Err(e) => {
                warn!("session restore failed: {e}");
                self.user = None;
                // A 401 already cleared the token in the API layer; any
                // other failure drops it here so the next start is clean.
                if let Err(e) = self.api.credentials().clear() {
                    warn!("failed to clear stale token: {e}");
                }
            }
        }
        self.checked = true;
        self.loading = false;
    }

    /// Log in with a username or email. On failure the session stays
    /// anonymous, the message lands in [`Session::last_error`], and the
    /// error propagates to the caller.
    pub async fn login(&mut self, identifier: &str, password: &str) -> Result<()> {
        self.loading = true;
        self.last_error = None;
        let resp = self.api.login(identifier, password).await;
        let result = self.finish_auth(resp).await;
        self.settle(result)
    }

    /// Create an account and sign in. Same shape as [`Session::login`].
    pub async fn signup(&mut self, signup: &SignupRequest) -> Result<()> {
        self.loading = true;
        self.last_error = None;
        let resp = self.api.signup(signup).await;
        let result = self.finish_auth(resp).await;
        self.settle(result)
    }

    /// Sign out. Best-effort: local state is anonymous afterwards even
    /// when the remote call fails.
    pub async fn logout(&mut self) {
        self.loading = true;
        if let Err(e) = self.api.logout().await {
            warn!("logout request failed: {e}");
        }
        self.user = None;
        self.checked = true;
        self.loading = false;
    }

    /// Delete the account. On failure the session stays authenticated,
    /// with the message recorded and the error propagated.
    pub async fn delete_account(&mut self) -> Result<()> {
        self.loading = true;
        self.last_error = None;
        let result = self.api.delete_account().await;
        match self.settle(result) {
            Ok(()) => {
                self.user = None;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve the user from an auth response, fetching it separately
    /// when the response omits it.
    async fn finish_auth(&mut self, resp: Result<AuthResponse>) -> Result<()> {
        let resp = resp?;
        let user = match resp.user {
            Some(user) => user,
            None => self.api.current_user().await?,
        };
        self.user = Some(user);
        Ok(())
    }

    /// Common completion path: every operation ends with `loading` false,
    /// and failures are recorded before propagating.
    fn settle(&mut self, result: Result<()>) -> Result<()> {
        self.loading = false;
        self.checked = true;
        if let Err(e) = &result {
            self.last_error = Some(e.to_string());
        }
        result
    }
}

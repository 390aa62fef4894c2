//! API access layer — typed operations against the auth and comic services.
//!
//! Every authenticated call attaches the stored bearer token, and a 401 on
//! any authenticated call clears the stored token. A missing token does not
//! block a call: the request goes out without credentials and the server's
//! 401 is the authority.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::credentials::CredentialStore;
use crate::error::{Error, Result};
use crate::model::{AuthResponse, Comic, Generated, SignupRequest, User, View};

/// Production endpoint of the Koma service.
pub const DEFAULT_BASE_URL: &str = "https://koma-ai.app";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    fn request(&self, method: Method, path: &str, authed: bool) -> RequestBuilder {
        debug!(%method, path, authed, "dispatching request");
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if authed {
            if let Some(token) = self.credentials.read() {
                req = req.bearer_auth(token);
            }
        }
        req
    }

    /// Shared response path. Success decodes into `T`; any non-2xx status
    /// becomes [`Error::Request`] with the body's `error` field as the
    /// message, falling back to `fallback`. A 401 on an authenticated call
    /// additionally drops the stored token.
    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        authed: bool,
        fallback: &str,
    ) -> Result<T> {
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        if authed && status == StatusCode::UNAUTHORIZED {
            warn!("server rejected the stored token, clearing it");
            if let Err(e) = self.credentials.clear() {
                warn!("failed to clear rejected token: {e}");
            }
        }

        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| fallback.to_string());

        Err(Error::Request {
            status: status.as_u16(),
            message,
        })
    }

    /// Create an account. The returned token, if any, is persisted.
    pub async fn signup(&self, signup: &SignupRequest) -> Result<AuthResponse> {
        let req = self
            .request(Method::POST, "/auth/signup", false)
            .json(signup);
        let resp: AuthResponse = self.send(req, false, "Signup failed").await?;
        if let Some(token) = &resp.token {
            self.credentials.save(token)?;
        }
        Ok(resp)
    }

    /// Log in with a username or email. The returned token, if any, is
    /// persisted.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse> {
        let body = serde_json::json!({
            "identifier": identifier,
            "password": password,
        });
        let req = self.request(Method::POST, "/auth/login", false).json(&body);
        let resp: AuthResponse = self.send(req, false, "Login failed").await?;
        if let Some(token) = &resp.token {
            self.credentials.save(token)?;
        }
        Ok(resp)
    }

    /// Invalidate the session server-side. Best-effort: the stored token
    /// is dropped whether or not the server acknowledged the logout.
    pub async fn logout(&self) -> Result<()> {
        let req = self.request(Method::POST, "/auth/logout", true);
        let result: Result<Value> = self.send(req, true, "Logout failed").await;
        self.credentials.clear()?;
        result.map(|_| ())
    }

    /// Fetch the user behind the stored token.
    pub async fn current_user(&self) -> Result<User> {
        #[derive(Deserialize)]
        struct MeResponse {
            user: User,
        }
        let req = self.request(Method::GET, "/auth/me", true);
        let resp: MeResponse = self.send(req, true, "Failed to fetch user data").await?;
        Ok(resp.user)
    }

    /// Delete the current account. The stored token is dropped on success.
    pub async fn delete_account(&self) -> Result<()> {
        let req = self.request(Method::DELETE, "/auth/delete", true);
        let _: Value = self.send(req, true, "Failed to delete account").await?;
        self.credentials.clear()?;
        Ok(())
    }

    /// List comics for a view, in server order.
    pub async fn list_comics(&self, view: View) -> Result<Vec<Comic>> {
        let authed = view.requires_auth();
        let req = self.request(Method::GET, view.path(), authed);
        self.send(req, authed, "Failed to fetch comics").await
    }

    /// Generate a new comic from a prompt.
    pub async fn generate(&self, prompt: &str) -> Result<Generated> {
        let body = serde_json::json!({ "prompt": prompt });
        let req = self
            .request(Method::POST, "/koma/generate", true)
            .json(&body);
        self.send(req, true, "Failed to generate comic").await
    }

    /// Like or unlike a comic. The server flips the state; the caller
    /// maintains its own local view of the result.
    pub async fn toggle_like(&self, comic_id: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct LikeResponse {
            #[serde(default)]
            message: String,
        }
        let path = format!("/koma/like/{comic_id}");
        let req = self.request(Method::POST, &path, true);
        let resp: LikeResponse = self.send(req, true, "Failed to update like").await?;
        Ok(resp.message)
    }
}

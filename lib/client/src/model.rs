//! Wire types shared by the auth and comic services.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user account. Server-authoritative snapshot, refreshed on login and
/// session check; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub name: String,
}

/// A generated comic, as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    /// Unique identifier (the service exposes it as `_id`).
    #[serde(rename = "_id")]
    pub id: String,

    /// Id of the user who generated it.
    pub user_id: String,

    /// URL of the rendered page image.
    pub image_url: String,

    /// The prompt the comic was generated from.
    pub prompt: String,

    /// Per-panel prompts, in panel order.
    #[serde(default)]
    pub panel_prompts: Vec<String>,

    /// Total like count.
    #[serde(default)]
    pub likes: u32,

    /// Whether the requesting user has liked this comic. Only present on
    /// authenticated list responses; absent means false.
    #[serde(default)]
    pub is_liked: bool,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// The four content-list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// All public comics.
    Explore,
    /// Most-liked comics.
    Top,
    /// Comics the current user has liked.
    Liked,
    /// The current user's own creations.
    Library,
}

impl View {
    /// API path of the list endpoint for this view.
    pub fn path(&self) -> &'static str {
        match self {
            View::Explore => "/koma/explore",
            View::Top => "/koma/top",
            View::Liked => "/koma/likes",
            View::Library => "/koma/my-library",
        }
    }

    /// Liked/Library are per-user and need a bearer token server-side;
    /// Explore/Top are public.
    pub fn requires_auth(&self) -> bool {
        matches!(self, View::Liked | View::Library)
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Explore => "explore",
            View::Top => "top",
            View::Liked => "liked",
            View::Library => "library",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explore" => Ok(View::Explore),
            "top" => Ok(View::Top),
            "liked" | "likes" => Ok(View::Liked),
            "library" | "my-library" => Ok(View::Library),
            other => Err(format!(
                "unknown view \"{}\" (expected explore, top, liked or library)",
                other
            )),
        }
    }
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    pub password: String,
    /// The user's generation API key, collected at signup.
    pub api: String,
}

/// Common shape of `/auth/signup` and `/auth/login` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Response of `POST /koma/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generated {
    #[serde(default)]
    pub message: String,
    pub image_url: String,
    #[serde(default)]
    pub panel_prompts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comic_decodes_wire_format() {
        let raw = r#"{
            "_id": "abc123",
            "user_id": "u1",
            "image_url": "https://cdn.example/abc.png",
            "prompt": "a ninja story",
            "panel_prompts": ["panel one", "panel two"],
            "likes": 3,
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let comic: Comic = serde_json::from_str(raw).unwrap();
        assert_eq!(comic.id, "abc123");
        assert_eq!(comic.panel_prompts.len(), 2);
        assert_eq!(comic.likes, 3);
        // is_liked is absent on public list responses.
        assert!(!comic.is_liked);
    }

    #[test]
    fn view_paths_and_auth() {
        assert_eq!(View::Explore.path(), "/koma/explore");
        assert_eq!(View::Library.path(), "/koma/my-library");
        assert!(!View::Explore.requires_auth());
        assert!(!View::Top.requires_auth());
        assert!(View::Liked.requires_auth());
        assert!(View::Library.requires_auth());
    }

    #[test]
    fn view_parses_from_cli_names() {
        assert_eq!("explore".parse::<View>().unwrap(), View::Explore);
        assert_eq!("Top".parse::<View>().unwrap(), View::Top);
        assert_eq!("likes".parse::<View>().unwrap(), View::Liked);
        assert_eq!("library".parse::<View>().unwrap(), View::Library);
        assert!("everything".parse::<View>().is_err());
    }

    #[test]
    fn auth_response_tolerates_missing_fields() {
        let resp: AuthResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }
}

//! Client SDK for the Koma AI manga service.
//!
//! Wraps the auth and comic HTTP APIs behind typed operations, keeps the
//! bearer token in a durable store, and tracks the signed-in session the
//! way the product's surfaces consume it.

pub mod api;
pub mod content;
pub mod credentials;
pub mod error;
pub mod model;
pub mod session;
pub mod validate;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use content::ComicLibrary;
pub use credentials::CredentialStore;
pub use error::{Error, Result};
pub use model::{AuthResponse, Comic, Generated, SignupRequest, User, View};
pub use session::{Session, SessionState};

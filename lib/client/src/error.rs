use thiserror::Error;

/// Errors surfaced by the Koma client.
#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a non-success status. The message is the
    /// response body's `error` field when the server provided one.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The request never produced a usable response (connection refused,
    /// malformed body, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The credential store could not be read or written.
    #[error("credential storage: {0}")]
    Storage(#[from] std::io::Error),
}

impl Error {
    /// True when the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Request { status: 401, .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_displays_server_message() {
        let err = Error::Request {
            status: 400,
            message: "username already taken".into(),
        };
        assert_eq!(err.to_string(), "username already taken");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_is_status_401() {
        let err = Error::Request {
            status: 401,
            message: "invalid token".into(),
        };
        assert!(err.is_unauthorized());
    }
}

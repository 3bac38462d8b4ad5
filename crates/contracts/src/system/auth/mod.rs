use serde::{Deserialize, Serialize};

/// Session deposited by the host shell. This application only reads it;
/// sign-in and refresh are the host's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSession {
    /// Raw value sent as the `Authorization` header
    pub token: String,

    /// Signed-in user's email, used as the notification recipient
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthSession {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

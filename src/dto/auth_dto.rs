use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserProfile;
use crate::services::auth_service::SignedIn;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

impl SignUpPayload {
    /// Trims the stored fields and lowercases the e-mail, so validation sees
    /// the values that get written.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.company = self.company.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInPayload {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileUpdatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub profile: UserProfile,
}

impl From<SignedIn> for AuthResponse {
    fn from(value: SignedIn) -> Self {
        Self {
            token: value.token,
            profile: value.profile,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub profile: UserProfile,
    pub google_calendar_connected: bool,
}

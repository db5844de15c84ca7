use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Gender selection on the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer_not_to_say",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "prefer_not_to_say" => Some(Gender::PreferNotToSay),
            _ => None,
        }
    }
}

/// Member record as served by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub language: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized user fields carried on comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
}

/// Signup form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "crate::validators::validate_password_strength"))]
    pub password: String,
    #[validate(length(min = 1, max = 64, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "last name is required"))]
    pub last_name: String,
    /// Must be true; checked by the signup schema, not a derive rule
    pub terms_accepted: bool,
    #[validate(nested)]
    pub profile: SignupProfile,
}

/// Nested profile block collected during signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignupProfile {
    #[validate(length(min = 1, max = 128, message = "state or region is required"))]
    pub state_region: String,
    #[validate(length(min = 1, max = 128, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, max = 256, message = "utilization purpose is required"))]
    pub utilization_purpose: String,
}

/// Sign-in form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Password reset completion payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[validate(custom(function = "crate::validators::validate_password_strength"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
}

/// Password reset initiation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestPasswordResetRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// Profile update form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 64))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub last_name: Option<String>,
    #[validate(custom(function = "crate::validators::validate_phone"))]
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    #[validate(length(min = 2, max = 32))]
    pub language: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub location: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
}

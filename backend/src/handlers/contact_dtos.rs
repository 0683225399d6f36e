use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "deliverable_address")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(default, rename = "sharedSecret", alias = "jwt_secretkey")]
    pub shared_secret: String,
}

// The validator's email rule is looser than the SMTP mailbox grammar; anything
// that would pass it but fail at send time is rejected up front.
fn deliverable_address(email: &str) -> Result<(), ValidationError> {
    email
        .parse::<lettre::Address>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("email").with_message("Invalid email address".into()))
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub say: String,
}

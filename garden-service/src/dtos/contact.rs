use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A contact form submission from the website.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactInquiry {
    #[validate(
        custom(function = "non_blank", message = "Name is required"),
        length(max = 120, message = "Name is too long")
    )]
    #[schema(example = "Ava")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ava@example.com")]
    pub email: String,

    #[validate(
        custom(function = "non_blank", message = "Message is required"),
        length(max = 5000, message = "Message is too long")
    )]
    #[schema(example = "Interested in lawn care")]
    pub message: String,

    #[serde(default)]
    #[validate(length(max = 32, message = "Phone number is too long"))]
    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200, message = "Subject is too long"))]
    #[schema(example = "Spring clean-up")]
    pub subject: Option<String>,
}

/// Rejects empty and whitespace-only text.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl ContactInquiry {
    /// Collection that stores submitted inquiries.
    pub const COLLECTION: &'static str = "contactinquiry";
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "65f1c0d2e4b0a1b2c3d4e5f6")]
    pub id: String,
}

impl ContactResponse {
    pub fn success(id: String) -> Self {
        Self {
            status: "success".to_string(),
            id,
        }
    }
}

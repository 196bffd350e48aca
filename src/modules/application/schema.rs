use serde::{Deserialize, Serialize};
use validator::Validate;

/// Applicant fields, as posted to `/api/applications/submit`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetails {
    #[validate(length(min = 1, message = "ConnectID cannot be empty"))]
    pub connect_id: String,
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(equal = 10, message = "Date of birth must be YYYY-MM-DD"))]
    pub date_of_birth: String,
    pub gender: String,
    pub location: String,
    pub job_title: String,
    pub industry: String,
    #[validate(length(min = 10, max = 11, message = "Invalid phone number"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "At least one photo is required"))]
    pub photo_urls: Vec<String>,
    #[validate(length(max = 500, message = "Bio too long"))]
    pub bio: String,
    pub why_join_reason: String,
}

impl ApplicantDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

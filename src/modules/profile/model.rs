use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub is_primary: bool,
    pub order: u32,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WrittenPrompt {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollPrompt {
    pub question: String,
    pub description: String,
    pub options: Vec<String>,
    pub selected_option: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDetails {
    pub children: String,
    pub company: String,
    pub dating_intentions: String,
    pub education_level: String,
    pub ethnicity: String,
    pub family_plans: String,
    pub gender: String,
    pub height: String,
    pub hometown: String,
    pub interested_in: String,
    pub job_title: String,
    pub languages: Vec<String>,
    pub pets: String,
    pub politics: String,
    pub pronouns: String,
    pub relationship_type: String,
    pub religious_beliefs: String,
    pub sexuality: String,
    pub university: String,
    pub zodiac_sign: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub connect_id: String,
    pub active: bool,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub location: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub written_prompts: Vec<WrittenPrompt>,
    #[serde(default)]
    pub poll_prompts: Vec<PollPrompt>,
    #[serde(default)]
    pub profile: ProfileDetails,
    pub subscription_type: Option<String>,
    #[serde(default)]
    pub version: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_active: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Re-stamps timestamps with the write time. An absent `lastActive` stays absent.
    pub fn stamped(mut self, now: DateTime<Utc>) -> Self {
        self.created_at = Some(now);
        self.updated_at = Some(now);
        if self.last_active.is_some() {
            self.last_active = Some(now);
        }
        self
    }
}

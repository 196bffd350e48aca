use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::schema::ApplicantDetails;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    PendingApproval,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [
        ApplicationStatus::PendingApproval,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::PendingApproval => "PENDING_APPROVAL",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored in `applicationSubmissions`, keyed by the applicant's ConnectID.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl ApplicationSubmission {
    pub fn pending(applicant: ApplicantDetails, submitted_at: DateTime<Utc>) -> Self {
        Self {
            applicant,
            status: ApplicationStatus::PendingApproval,
            submitted_at,
            reviewed_at: None,
            reviewed_by: None,
            review_notes: None,
            approved_at: None,
            rejected_at: None,
            rejection_reason: None,
        }
    }

    pub fn approve(mut self, reviewer: &str, at: DateTime<Utc>, notes: &str) -> Self {
        self.status = ApplicationStatus::Approved;
        self.reviewed_at = Some(at);
        self.reviewed_by = Some(reviewer.to_string());
        self.review_notes = Some(notes.to_string());
        self.approved_at = Some(at);
        self
    }

    pub fn reject(mut self, reviewer: &str, at: DateTime<Utc>, reason: &str, notes: &str) -> Self {
        self.status = ApplicationStatus::Rejected;
        self.reviewed_at = Some(at);
        self.reviewed_by = Some(reviewer.to_string());
        self.review_notes = Some(notes.to_string());
        self.rejected_at = Some(at);
        self.rejection_reason = Some(reason.to_string());
        self
    }

    pub fn connect_id(&self) -> &str {
        &self.applicant.connect_id
    }
}

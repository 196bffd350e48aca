use crate::db::StoredDocument;

pub const ADMIN_ROLE: &str = "ADMIN";
pub const ADMIN_EMAIL: &str = "admin@connect.com";
/// Password shared by every generated test account.
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Row of the `userAuth` collection, reduced to what the maintenance tools show.
/// Each field is read on its own, so a malformed name never hides the email.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRecord {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthRecord {
    pub fn from_document(doc: &StoredDocument) -> Self {
        Self {
            id: doc.id.clone(),
            email: doc.str_field("email").unwrap_or("NO_EMAIL").to_string(),
            first_name: doc.str_field("firstName").unwrap_or("NO_NAME").to_string(),
            last_name: doc.str_field("lastName").unwrap_or_default().to_string(),
        }
    }

    pub fn describe(&self) -> String {
        format!("{} ({} {} - {})", self.id, self.first_name, self.last_name, self.email)
    }
}

use crate::modules::account::crud::AccountCrud;
use crate::modules::account::model::AuthRecord;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CleanupPlan {
    pub preserved: Vec<AuthRecord>,
    pub to_delete: Vec<AuthRecord>,
}

impl CleanupPlan {
    /// Everything except records whose email equals `keep_email` is deleted.
    pub fn new(records: Vec<AuthRecord>, keep_email: &str) -> Self {
        let (preserved, to_delete) = records.into_iter().partition(|r| r.email == keep_email);
        Self { preserved, to_delete }
    }

    pub fn total(&self) -> usize {
        self.preserved.len() + self.to_delete.len()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CleanupReport {
    pub deleted: usize,
    pub failed: usize,
    pub preserved: usize,
    pub processed: usize,
}

/// Deletes one record at a time. A failure, including a record that was already
/// gone, is logged and counted, not fatal.
pub async fn execute(crud: &AccountCrud<'_>, plan: &CleanupPlan) -> CleanupReport {
    let mut report = CleanupReport {
        preserved: plan.preserved.len(),
        processed: plan.total(),
        ..Default::default()
    };

    for record in &plan.to_delete {
        match crud.delete_auth_record(&record.id).await {
            Ok(true) => {
                tracing::info!(id = %record.id, email = %record.email, "deleted profile");
                report.deleted += 1;
            }
            Ok(false) => {
                tracing::error!(id = %record.id, "profile not found, nothing deleted");
                report.failed += 1;
            }
            Err(e) => {
                tracing::error!(id = %record.id, error = %e, "error deleting profile");
                report.failed += 1;
            }
        }
    }

    report
}

/// Accepts y/yes/n/no in any case. Anything else is `None`.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_answers() {
        assert_eq!(parse_confirmation(" YES\n"), Some(true));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
    }
}

use chrono::{Duration, TimeZone, Utc};
use connect_ops::db::collections::APPLICATION_SUBMISSIONS;
use connect_ops::db::memory::MemoryStore;
use connect_ops::db::DocumentStore;
use connect_ops::modules::application::crud::ApplicationCrud;
use connect_ops::modules::application::generator::{
    fixed_mix, weighted, ADMIN_REVIEWER_ID, DEFAULT_REJECTION_REASON, EXTENDED_POOL, STANDARD_POOL,
};
use connect_ops::modules::application::model::{ApplicationStatus, ApplicationSubmission};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use validator::Validate;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 15, 10, 0, 0).unwrap()
}

fn assert_review_fields(s: &ApplicationSubmission) {
    match s.status {
        ApplicationStatus::PendingApproval => {
            assert!(s.reviewed_at.is_none());
            assert!(s.reviewed_by.is_none());
            assert!(s.approved_at.is_none());
            assert!(s.rejected_at.is_none());
        }
        ApplicationStatus::Approved => {
            assert_eq!(s.reviewed_by.as_deref(), Some(ADMIN_REVIEWER_ID));
            assert_eq!(s.approved_at, s.reviewed_at);
            assert!(s.rejected_at.is_none());
        }
        ApplicationStatus::Rejected => {
            assert_eq!(s.reviewed_by.as_deref(), Some(ADMIN_REVIEWER_ID));
            assert_eq!(s.rejected_at, s.reviewed_at);
            assert!(s.rejection_reason.is_some());
        }
    }
    if let Some(reviewed_at) = s.reviewed_at {
        assert!(reviewed_at > s.submitted_at);
        assert!(reviewed_at - s.submitted_at <= Duration::hours(48));
    }
    assert!(s.submitted_at < now());
    assert!(now() - s.submitted_at <= Duration::days(30));
}

#[test]
fn test_fixed_mix_counts() {
    let mut rng = StdRng::seed_from_u64(11);
    let batch = fixed_mix(&mut rng, now());

    assert_eq!(batch.len(), 10);
    let count = |status| batch.iter().filter(|s| s.status == status).count();
    assert_eq!(count(ApplicationStatus::PendingApproval), 4);
    assert_eq!(count(ApplicationStatus::Approved), 3);
    assert_eq!(count(ApplicationStatus::Rejected), 3);

    for s in &batch {
        assert_review_fields(s);
        assert_eq!(s.applicant.photo_urls.len(), 3);
        if s.status == ApplicationStatus::Rejected {
            assert_eq!(s.rejection_reason.as_deref(), Some(DEFAULT_REJECTION_REASON));
        }
        assert!(s.applicant.validate().is_ok());
    }
}

#[test]
fn test_weighted_batch() {
    let mut rng = StdRng::seed_from_u64(5);
    let batch = weighted(&mut rng, 200, now());

    assert_eq!(batch.len(), 200);
    for status in ApplicationStatus::ALL {
        assert!(batch.iter().any(|s| s.status == status), "no {status} generated");
    }
    for s in &batch {
        assert_review_fields(s);
        assert!(s.applicant.email.ends_with("@newtest.com"));
        assert!((3..=6).contains(&s.applicant.photo_urls.len()));
    }
}

#[test]
fn test_applicant_validation() {
    let mut rng = StdRng::seed_from_u64(9);
    let valid = EXTENDED_POOL.applicant(&mut rng, 2025);
    assert!(valid.validate().is_ok());

    let mut invalid = STANDARD_POOL.applicant(&mut rng, 2025);
    invalid.email = "not-an-email".to_string();
    invalid.photo_urls.clear();
    invalid.bio = "x".repeat(501);

    let errors = invalid.validate().unwrap_err();
    let fields = errors.field_errors();
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("photo_urls"));
    assert!(fields.contains_key("bio"));
}

#[test]
fn test_submission_wire_shape() {
    let mut rng = StdRng::seed_from_u64(2);
    let applicant = STANDARD_POOL.applicant(&mut rng, 2025);
    let submission = ApplicationSubmission::pending(applicant, now());

    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(value["status"], "PENDING_APPROVAL");
    assert!(value["connectId"].is_string());
    assert!(value["photoUrls"].is_array());
    assert!(value.get("reviewedBy").is_none());

    let approved = submission.approve("1", now(), "ok");
    let value = serde_json::to_value(&approved).unwrap();
    assert_eq!(value["status"], "APPROVED");
    assert_eq!(value["reviewedBy"], "1");
}

#[tokio::test]
async fn test_save_and_count_by_status() {
    let store = MemoryStore::new();
    let crud = ApplicationCrud::new(&store);
    let mut rng = StdRng::seed_from_u64(21);
    let batch = fixed_mix(&mut rng, now());

    assert_eq!(crud.save_batch(&batch).await.unwrap(), 10);
    store
        .set(APPLICATION_SUBMISSIONS, "junk", json!({ "status": "UNKNOWN" }))
        .await
        .unwrap();

    let counts = crud.count_by_status().await.unwrap();
    assert_eq!(counts.get(&ApplicationStatus::PendingApproval), Some(&4));
    assert_eq!(counts.get(&ApplicationStatus::Approved), Some(&3));
    assert_eq!(counts.get(&ApplicationStatus::Rejected), Some(&3));

    let first = crud.find(batch[0].connect_id()).await.unwrap().unwrap();
    assert_eq!(first, batch[0]);
}

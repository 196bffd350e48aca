use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use connect_ops::db::memory::MemoryStore;
use connect_ops::db::collections::USER_PROFILES;
use connect_ops::modules::profile::crud::ProfileCrud;
use connect_ops::modules::profile::fixture;
use connect_ops::modules::profile::generator::{generate_profiles, ProfileSummary};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn setup_profiles(count: usize) -> Vec<connect_ops::modules::profile::model::UserProfile> {
    let mut rng = StdRng::seed_from_u64(42);
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap();
    generate_profiles(&mut rng, count, now)
}

#[test]
fn test_generated_profiles_are_well_formed() {
    let profiles = setup_profiles(50);
    assert_eq!(profiles.len(), 50);

    for (i, p) in profiles.iter().enumerate() {
        assert_eq!(p.connect_id.len(), 12);
        assert_eq!(p.email, format!("{}@test.com", 1000 + i));
        assert!(p.gender == "Male" || p.gender == "Female");
        assert!((3..=8).contains(&p.interests.len()));
        assert!((3..=6).contains(&p.photos.len()));
        assert!((1..=3).contains(&p.written_prompts.len()));
        assert!((1..=2).contains(&p.poll_prompts.len()));
        assert_eq!(p.profile.languages[0], "English");

        let primaries = p.photos.iter().filter(|ph| ph.is_primary).count();
        assert_eq!(primaries, 1);
        assert!(p.photos[0].is_primary);
        let orders: Vec<u32> = p.photos.iter().map(|ph| ph.order).collect();
        assert_eq!(orders, (1..=p.photos.len() as u32).collect::<Vec<_>>());

        let unique: HashSet<_> = p.interests.iter().collect();
        assert_eq!(unique.len(), p.interests.len());

        for poll in &p.poll_prompts {
            assert!(poll.options.contains(&poll.selected_option));
        }
    }
}

#[test]
fn test_summary_reports_gender_split_and_ages() {
    let profiles = setup_profiles(40);
    let summary = ProfileSummary::of(&profiles, 2025);

    assert_eq!(summary.males + summary.females, 40);
    assert!(summary.locations >= 1);
    let (youngest, oldest) = summary.age_range.unwrap();
    assert!(youngest >= 22);
    assert!(oldest <= 37);

    assert_eq!(ProfileSummary::of(&[], 2025).age_range, None);
}

#[test]
fn test_fixture_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profiles.json");
    let profiles = setup_profiles(5);

    fixture::save(&path, &profiles).unwrap();
    let loaded = fixture::load(&path).unwrap();

    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded[0].connect_id, profiles[0].connect_id);
    assert_eq!(loaded[4].photos.len(), profiles[4].photos.len());
}

#[test]
fn test_fixture_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(fixture::load(&missing), Err(fixture::FixtureError::IoError(_))));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(fixture::load(&broken), Err(fixture::FixtureError::JsonError(_))));
}

#[test]
fn test_stamped_keeps_absent_last_active() {
    let later = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    for profile in setup_profiles(20) {
        let had_last_active = profile.last_active.is_some();
        let stamped = profile.stamped(later);
        assert_eq!(stamped.created_at, Some(later));
        assert_eq!(stamped.updated_at, Some(later));
        assert_eq!(stamped.last_active.is_some(), had_last_active);
    }
}

#[tokio::test]
async fn test_upload_in_batches() {
    let store = MemoryStore::new();
    let crud = ProfileCrud::new(&store);
    let profiles = setup_profiles(25);

    let report = crud.upload_in_batches(&profiles, 10).await;

    assert_eq!(report.uploaded, 25);
    assert_eq!(report.batches, 3);
    assert!(report.failure.is_none());
    assert_eq!(store.count(USER_PROFILES).await, 25);
    assert_eq!(crud.count().await.unwrap(), 25);

    let found = crud.find(&profiles[12].connect_id).await.unwrap().unwrap();
    assert_eq!(found.email, profiles[12].email);
}

#[tokio::test]
async fn test_reupload_overwrites_by_connect_id() {
    let store = MemoryStore::new();
    let crud = ProfileCrud::new(&store);
    let profiles = setup_profiles(3);

    crud.save_batch(&profiles).await.unwrap();
    crud.save_batch(&profiles).await.unwrap();

    assert_eq!(crud.count().await.unwrap(), 3);
}

//! Uploads the JSON fixture written by `generate_test_data`, ten profiles per batch.

use chrono::Utc;
use connect_ops::config::{database, env_or, logging};
use connect_ops::modules::profile::crud::ProfileCrud;
use connect_ops::modules::profile::fixture::{self, DEFAULT_FIXTURE_PATH};
use connect_ops::modules::profile::model::UserProfile;
use std::path::PathBuf;

const BATCH_SIZE: usize = 10;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    println!("🚀 Starting test data upload...");

    let path = PathBuf::from(env_or("PROFILE_FIXTURE_PATH", DEFAULT_FIXTURE_PATH));
    let profiles = match fixture::load(&path) {
        Ok(profiles) => profiles,
        Err(e) => {
            println!("💥 Could not read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };
    println!("📖 Loaded {} profiles from {}", profiles.len(), path.display());

    let store = match database::connect().await {
        Ok(store) => store,
        Err(e) => {
            println!("💥 Unexpected error: {}", e);
            std::process::exit(1);
        }
    };

    let now = Utc::now();
    let profiles: Vec<UserProfile> = profiles.into_iter().map(|p| p.stamped(now)).collect();
    for profile in &profiles {
        println!("  ✅ Prepared: {} - {}", profile.connect_id, profile.full_name());
    }

    let report = ProfileCrud::new(&store).upload_in_batches(&profiles, BATCH_SIZE).await;
    println!("📊 Progress: {}/{} profiles uploaded in {} batches", report.uploaded, profiles.len(), report.batches);

    match report.failure {
        None => {
            println!("🎉 Successfully uploaded {} test profiles!", report.uploaded);
            println!("✅ Test data upload completed successfully!");
        }
        Some((batch, e)) => {
            println!("❌ Error uploading batch {}: {}", batch, e);
            println!("❌ Test data upload failed!");
            std::process::exit(1);
        }
    }
}

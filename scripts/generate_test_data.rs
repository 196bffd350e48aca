//! Generates random user profiles into a local JSON fixture.
//! Run with: cargo run --bin generate_test_data

use chrono::Utc;
use connect_ops::config::{env_or, env_usize_or, logging};
use connect_ops::modules::profile::fixture::{self, DEFAULT_FIXTURE_PATH};
use connect_ops::modules::profile::generator::{generate_profiles, ProfileSummary};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let count = env_usize_or("PROFILE_COUNT", 50);
    let output = PathBuf::from(env_or("PROFILE_FIXTURE_PATH", DEFAULT_FIXTURE_PATH));

    println!("🚀 Generating {} test user profiles...", count);

    let profiles = generate_profiles(&mut rand::thread_rng(), count, Utc::now());
    fixture::save(&output, &profiles)?;

    println!("✅ Generated {} test profiles", profiles.len());
    println!("📁 Saved to: {}", output.display());

    let summary = ProfileSummary::for_today(&profiles);
    println!("\n📊 Profile Summary:");
    println!("   👨 Males: {}", summary.males);
    println!("   👩 Females: {}", summary.females);
    println!("   🌍 Locations: {} different cities", summary.locations);
    if let Some((youngest, oldest)) = summary.age_range {
        println!("   🎂 Age range: {}-{} years", youngest, oldest);
    }

    println!("\n🔢 Sample ConnectIDs:");
    for profile in profiles.iter().take(5) {
        println!("   {} - {}", profile.connect_id, profile.full_name());
    }

    Ok(())
}

//! Writes fifteen weighted-status applications in a single batch.

use chrono::Utc;
use connect_ops::config::{database, logging};
use connect_ops::modules::application::crud::ApplicationCrud;
use connect_ops::modules::application::generator::weighted;
use connect_ops::modules::application::model::ApplicationStatus;
use std::collections::HashMap;

const APPLICATION_COUNT: usize = 15;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    println!("🔄 Generating new test applications...");
    let submissions = weighted(&mut rand::thread_rng(), APPLICATION_COUNT, Utc::now());

    println!("📝 Generated {} test applications:", submissions.len());
    let mut counts: HashMap<ApplicationStatus, usize> = HashMap::new();
    for submission in &submissions {
        *counts.entry(submission.status).or_insert(0) += 1;
        println!("   {} ({})", submission.applicant.full_name(), submission.status);
    }

    println!("\n📊 Status breakdown:");
    for status in ApplicationStatus::ALL {
        println!("   {}: {}", status, counts.get(&status).copied().unwrap_or(0));
    }

    println!("\n💾 Saving to the store...");
    let store = database::connect().await?;
    let written = ApplicationCrud::new(&store).save_batch(&submissions).await?;
    println!("✅ Successfully added {} test applications", written);

    println!("\n🎉 Test data generation complete!");
    println!("   Total new applications: {}", submissions.len());
    Ok(())
}

//! Submits ten random applications through the backend API.

use chrono::{Datelike, Utc};
use connect_ops::config::logging;
use connect_ops::modules::application::generator::STANDARD_POOL;
use connect_ops::services::backend::BackendClient;
use std::time::Duration;

const APPLICATION_COUNT: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let client = BackendClient::from_env()?;
    let year = Utc::now().year();

    println!("🚀 Generating {} test applications for admin testing...", APPLICATION_COUNT);

    let mut successful = 0;
    let mut failed = 0;

    for i in 0..APPLICATION_COUNT {
        println!("\n📝 Creating application {}/{}...", i + 1, APPLICATION_COUNT);
        let applicant = STANDARD_POOL.applicant(&mut rand::thread_rng(), year);

        match client.submit_application(&applicant).await {
            Ok(()) => {
                println!(
                    "✅ Successfully created application for {} (ID: {})",
                    applicant.full_name(),
                    applicant.connect_id
                );
                successful += 1;
            }
            Err(e) => {
                println!("❌ Failed to create application for {}: {}", applicant.full_name(), e);
                failed += 1;
            }
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    println!(
        "\n🎉 Complete! Successfully created {} applications, {} failed.",
        successful, failed
    );
    println!("Applications are now available in the admin dashboard for testing!");
    Ok(())
}

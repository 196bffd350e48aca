//! Writes ten applications straight to the store: 4 pending, 3 approved, 3 rejected.

use chrono::Utc;
use connect_ops::config::{database, logging};
use connect_ops::modules::application::crud::ApplicationCrud;
use connect_ops::modules::application::generator::fixed_mix;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let store = database::connect().await?;
    let crud = ApplicationCrud::new(&store);

    let submissions = fixed_mix(&mut rand::thread_rng(), Utc::now());
    let total = submissions.len();
    println!("🚀 Generating {} test applications directly in the store...", total);

    let mut successful = 0;
    let mut failed = 0;

    for (i, submission) in submissions.iter().enumerate() {
        println!("\n📝 Creating {} application {}/{}...", submission.status, i + 1, total);
        match crud.save(submission).await {
            Ok(()) => {
                println!(
                    "✅ Successfully created {} application for {} (ID: {})",
                    submission.status,
                    submission.applicant.full_name(),
                    submission.connect_id()
                );
                successful += 1;
            }
            Err(e) => {
                println!("❌ Error creating application {}: {}", submission.connect_id(), e);
                failed += 1;
            }
        }
    }

    println!(
        "\n🎉 Complete! Successfully created {} applications, {} failed.",
        successful, failed
    );
    println!("Applications are now available in the admin dashboard for testing!");
    println!("Created: ~4 PENDING, ~3 APPROVED, ~3 REJECTED applications");
    Ok(())
}

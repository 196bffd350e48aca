//! Deletes every `userAuth` record except the admin account, after confirmation.
//! Run with: cargo run --bin cleanup_userprofiles

use connect_ops::config::{database, env_or, logging};
use connect_ops::modules::account::cleanup::{self, parse_confirmation, CleanupPlan};
use connect_ops::modules::account::crud::AccountCrud;
use connect_ops::modules::account::model::ADMIN_EMAIL;
use std::io::{self, BufRead, Write};

fn confirm() -> io::Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("\nDo you want to proceed? (yes/no): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match parse_confirmation(&line) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'yes' or 'no'"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let keep_email = env_or("ADMIN_EMAIL", ADMIN_EMAIL);

    println!("🧹 Document Store Cleanup Script");
    println!("📄 Collection: userAuth");
    println!("🔒 Preserving: {}", keep_email);
    println!("{}", "=".repeat(50));

    let store = match database::connect().await {
        Ok(store) => store,
        Err(e) => {
            println!("❌ Error initializing store: {}", e);
            std::process::exit(1);
        }
    };
    let crud = AccountCrud::new(&store);

    println!("\n📋 Fetching all user profiles...");
    let records = match crud.list_auth_records().await {
        Ok(records) => records,
        Err(e) => {
            println!("❌ Error getting user profiles: {}", e);
            Vec::new()
        }
    };

    if records.is_empty() {
        println!("ℹ️  No profiles found in userAuth collection");
        return Ok(());
    }
    println!("📊 Found {} total profiles", records.len());

    let plan = CleanupPlan::new(records, &keep_email);

    println!("🔒 Found {} admin profile(s) to preserve:", plan.preserved.len());
    for record in &plan.preserved {
        println!("   - {}", record.describe());
    }
    println!("🗑️  Found {} profile(s) to delete:", plan.to_delete.len());
    for record in &plan.to_delete {
        println!("   - {}", record.describe());
    }

    if plan.to_delete.is_empty() {
        println!("✅ No profiles to delete. Admin profile is the only one present.");
        return Ok(());
    }

    println!("\n⚠️  WARNING: This will permanently delete {} profile(s)!", plan.to_delete.len());
    println!("This action cannot be undone.");

    if !confirm()? {
        println!("❌ Operation cancelled by user");
        return Ok(());
    }

    println!("\n🗑️  Deleting {} profiles...", plan.to_delete.len());
    let report = cleanup::execute(&crud, &plan).await;

    println!("\n{}", "=".repeat(50));
    println!("📊 CLEANUP SUMMARY");
    println!("{}", "=".repeat(50));
    println!("✅ Successfully deleted: {} profiles", report.deleted);
    println!("❌ Failed to delete: {} profiles", report.failed);
    println!("🔒 Preserved admin profiles: {}", report.preserved);
    println!("📈 Total profiles processed: {}", report.processed);

    if report.failed > 0 {
        println!("\n⚠️  {} profiles failed to delete. Check the error messages above.", report.failed);
        std::process::exit(1);
    }

    println!("\n🎉 Cleanup completed successfully!");
    println!("🔒 Only {} profile(s) remain in the userAuth collection.", keep_email);
    Ok(())
}

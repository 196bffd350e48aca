//! Prints login details for the fixed test accounts.

use connect_ops::config::{database, logging};
use connect_ops::modules::account::crud::AccountCrud;
use connect_ops::modules::account::model::TEST_PASSWORD;

const TEST_USERS: &[&str] = &["346492379800", "523214175859"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let store = match database::connect().await {
        Ok(store) => store,
        Err(e) => {
            println!("❌ {}", e);
            std::process::exit(1);
        }
    };
    let crud = AccountCrud::new(&store);

    println!("🔐 GETTING TEST USER CREDENTIALS");
    println!("{}", "=".repeat(60));

    match crud.list_users(10).await {
        Ok(users) => {
            println!("📋 EXISTING TEST USERS:");
            for user in users {
                println!("   🆔 {} - 📧 {}", user.id, user.str_field("email").unwrap_or("Unknown"));
            }
        }
        Err(e) => println!("❌ Error getting users: {}", e),
    }

    println!("\n🎯 SPECIFIC TEST USERS:");
    println!("{}", "=".repeat(40));

    for user_id in TEST_USERS {
        println!("\n👤 USER: {}", user_id);

        match crud.find_directory_profile(user_id).await {
            Ok(Some(profile)) => println!(
                "   Name: {} {}",
                profile.str_field("firstName").unwrap_or("Unknown"),
                profile.str_field("lastName").unwrap_or("Unknown")
            ),
            Ok(None) => {
                println!("   ❌ No profile found");
                continue;
            }
            Err(e) => {
                println!("   ❌ Error getting profile: {}", e);
                continue;
            }
        }

        match crud.find_user(user_id).await {
            Ok(Some(user)) => {
                println!("   📧 Email: {}", user.str_field("email").unwrap_or("Unknown"));
                println!("   🔑 Password: {}", TEST_PASSWORD);
                println!("   🆔 Connect ID: {}", user_id);
            }
            Ok(None) => println!("   ❌ No user auth found"),
            Err(e) => println!("   ❌ Error getting user auth: {}", e),
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("📱 LOGIN INSTRUCTIONS:");
    println!("1. Open the app on one device");
    println!("2. Use the email and password above");
    println!("3. Complete profile if needed");
    println!("4. Go to Discovery and like the other user");
    println!("5. Repeat on second device with the other user");
    println!("6. Check for mutual match and conversation!");
    Ok(())
}

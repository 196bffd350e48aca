//! Registers the two fixed accounts used for manual mutual-match testing.

use connect_ops::config::logging;
use connect_ops::modules::account::model::TEST_PASSWORD;
use connect_ops::modules::account::schema::{RegisterOutcome, RegisterRequest};
use connect_ops::services::backend::{BackendClient, BackendError};

fn test_user(connect_id: &str, email: &str, first: &str, last: &str, dob: &str, gender: &str) -> RegisterRequest {
    RegisterRequest {
        connect_id: Some(connect_id.to_string()),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        confirm_password: Some(TEST_PASSWORD.to_string()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: dob.to_string(),
        gender: gender.to_string(),
        location: "San Francisco, CA".to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let client = BackendClient::from_env()?;
    let users = [
        test_user("346492379800", "user1@test.com", "Alice", "Johnson", "1995-03-15", "Female"),
        test_user("523214175859", "user2@test.com", "Bob", "Smith", "1993-07-22", "Male"),
    ];

    println!("🔐 CREATING TEST USERS FOR MUTUAL MATCHING");
    println!("{}", "=".repeat(60));

    for user in &users {
        println!("\n👤 Creating user: {} {}", user.first_name, user.last_name);
        println!("   📧 Email: {}", user.email);
        println!("   🔑 Password: {}", user.password);
        println!("   🆔 Connect ID: {}", user.connect_id.as_deref().unwrap_or_default());

        match client.register(user).await {
            Ok(RegisterOutcome::Created) => println!("   ✅ User registered successfully"),
            Ok(RegisterOutcome::AlreadyExists) => println!("   ✅ User already exists (expected)"),
            Err(BackendError::ApiError { status, message }) => {
                println!("   📝 Register response: {}", status);
                println!("   ⚠️  Unexpected response: {}", message);
            }
            Err(e) => println!("   ❌ Registration failed: {}", e),
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("🎯 TEST USERS READY!");
    for (device, user) in users.iter().enumerate() {
        println!("\n📱 DEVICE {} LOGIN:", device + 1);
        println!("   📧 Email: {}", user.email);
        println!("   🔑 Password: {}", user.password);
        println!("   👤 User: {} {}", user.first_name, user.last_name);
    }

    println!("\n🚀 TESTING STEPS:");
    println!("1. Login on Device 1 with {}'s credentials", users[0].first_name);
    println!("2. Go to Discovery and like {}", users[1].first_name);
    println!("3. Login on Device 2 with {}'s credentials", users[1].first_name);
    println!("4. Go to Discovery and like {}", users[0].first_name);
    println!("5. Check for 'It's a Match!' notification");
    println!("6. Verify conversation is available in chat");

    Ok(())
}

//! Walks the discovery endpoints for one user: auth, status, today's matches, countdown.

use connect_ops::config::{env_or, logging};
use connect_ops::modules::account::model::TEST_PASSWORD;
use connect_ops::modules::account::schema::{RegisterOutcome, RegisterRequest};
use connect_ops::services::backend::BackendClient;

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let client = BackendClient::from_env()?;
    let user_id = env_or("DISCOVERY_USER_ID", "397286402299");
    let email = env_or("DISCOVERY_USER_EMAIL", "1049@test.com");

    println!("🔍 Testing Discovery API for user: {}", user_id);
    println!("{}", "=".repeat(60));

    println!("\n1️⃣ Attempting to get authentication token...");
    println!("   Trying email: {}", email);

    let register = RegisterRequest {
        connect_id: None,
        email: email.clone(),
        password: TEST_PASSWORD.to_string(),
        confirm_password: None,
        first_name: "Ben".to_string(),
        last_name: "Gonzalez".to_string(),
        date_of_birth: "1992-01-01".to_string(),
        gender: "Male".to_string(),
        location: "Portland, OR".to_string(),
    };

    match client.register(&register).await {
        Ok(RegisterOutcome::AlreadyExists) => println!("   ✅ User already exists (expected)"),
        Ok(RegisterOutcome::Created) => println!("   ✅ User registered successfully"),
        Err(e) => println!("   ⚠️  Register failed: {}", e),
    }

    let token = match client.login(&email, TEST_PASSWORD).await {
        Ok(token) => {
            println!("   ✅ Login successful");
            token
        }
        Err(e) => {
            println!("   ❌ Login failed: {}", e);
            println!("\n   🔧 Trying test token endpoint...");
            match client.generate_test_token(&user_id).await {
                Ok(token) => {
                    println!("   ✅ Test token generated");
                    token
                }
                Err(e) => {
                    println!("   ❌ Test token failed: {}", e);
                    return Ok(());
                }
            }
        }
    };
    println!("   Token (first 20 chars): {}...", token.chars().take(20).collect::<String>());

    println!("\n2️⃣ Testing discovery status endpoint...");
    match client.discovery_status(&token).await {
        Ok(status) => {
            println!("   ✅ Status retrieved successfully");
            println!("   Status data: {}", pretty(&status));
        }
        Err(e) => println!("   ❌ Status failed: {}", e),
    }

    println!("\n3️⃣ Testing today's matches endpoint...");
    match client.todays_matches(&token).await {
        Ok(matches) => {
            println!("   ✅ Matches retrieved successfully");
            println!("   Success: {}", matches.success);
            println!("   Message: {}", matches.message.as_deref().unwrap_or("No message"));
            println!("   Users count: {}", matches.users.len());
            println!("   Batch ID: {}", matches.batch_id.as_deref().unwrap_or("None"));
            println!("   Total count: {}", matches.total_count);
            println!("   End of matches: {}", matches.end_of_matches);

            if !matches.users.is_empty() {
                println!("   📋 Sample matches:");
                for (i, user) in matches.users.iter().take(3).enumerate() {
                    let field = |key: &str| user.get(key).and_then(|v| v.as_str()).unwrap_or("Unknown").to_string();
                    println!(
                        "     {}. {} - {} {}",
                        i + 1,
                        field("connectId"),
                        field("firstName"),
                        field("lastName")
                    );
                }
            }
        }
        Err(e) => println!("   ❌ Matches failed: {}", e),
    }

    println!("\n4️⃣ Testing matches countdown endpoint...");
    match client.matches_countdown(&token).await {
        Ok(countdown) => {
            println!("   ✅ Countdown retrieved successfully");
            println!("   Countdown data: {}", pretty(&countdown));
        }
        Err(e) => println!("   ❌ Countdown failed: {}", e),
    }

    println!("\n{}", "=".repeat(60));
    println!("🔧 API TEST SUMMARY:");
    println!("Check above results to see where the discovery flow is breaking");
    Ok(())
}

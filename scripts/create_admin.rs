//! Run with: cargo run --bin create_admin

use connect_ops::config::{env_or, logging};
use connect_ops::modules::account::model::ADMIN_EMAIL;
use connect_ops::modules::account::schema::CreateAdminRequest;
use connect_ops::services::backend::BackendClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let client = BackendClient::from_env()?;
    let request = CreateAdminRequest {
        email: env_or("ADMIN_EMAIL", ADMIN_EMAIL),
        password: env_or("ADMIN_PASSWORD", "admin123"),
    };

    match client.create_admin(&request).await {
        Ok(admin) => {
            println!("✅ Admin user created successfully!");
            println!("📧 Email: {}", admin.email.unwrap_or_default());
            println!("🆔 ConnectID: {}", admin.connect_id.unwrap_or_default());
        }
        Err(e) if e.is_unreachable() => {
            println!(
                "❌ Could not connect to backend server. Make sure it's running on {}",
                client.base_url()
            );
            std::process::exit(1);
        }
        Err(e) => {
            println!("❌ Failed to create admin user: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

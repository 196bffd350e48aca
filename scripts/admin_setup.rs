//! Promotes an existing account to the ADMIN role.
//! Run with: cargo run --bin admin_setup

use connect_ops::config::{database, env_or, logging};
use connect_ops::modules::account::crud::AccountCrud;
use connect_ops::modules::account::model::ADMIN_EMAIL;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let store = database::connect().await?;
    let crud = AccountCrud::new(&store);
    let email = env_or("ADMIN_EMAIL", ADMIN_EMAIL);

    let promoted = crud.promote_to_admin(&email).await?;
    for id in &promoted {
        println!("Found user: {}", id);
        println!("Updated user role to ADMIN");
    }

    if promoted.is_empty() {
        println!("⚠️  No user found with email {}", email);
    }

    println!("Admin setup complete!");
    Ok(())
}

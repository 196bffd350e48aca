//! Clears two users' actions and seeds match pools so each discovers the other.

use chrono::Utc;
use connect_ops::config::{database, env_or, logging};
use connect_ops::modules::actions::crud::UserActionsCrud;
use connect_ops::modules::match_pool::crud::MatchPoolCrud;
use connect_ops::modules::match_pool::model::UserMatchPool;

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

    let user1 = env_or("USER_A_ID", "346492379800");
    let user2 = env_or("USER_B_ID", "523214175859");

    println!("🎯 Setting up mutual match test scenario");
    println!("👤 User 1: {}", user1);
    println!("👤 User 2: {}", user2);
    println!("{}", "=".repeat(60));

    println!("1️⃣ CLEARING EXISTING USER ACTIONS...");
    let actions = UserActionsCrud::new(&store);
    for id in [&user1, &user2] {
        match actions.delete(id).await {
            Ok(_) => println!("✅ Cleared userActions for {}", id),
            Err(e) => println!("⚠️ Error clearing userActions: {}", e),
        }
    }

    println!("\n2️⃣ CREATING USER MATCH POOLS...");
    let now = Utc::now();
    let today = now.date_naive();
    let pools = MatchPoolCrud::new(&store);

    for (owner, candidate) in [(&user1, &user2), (&user2, &user1)] {
        let pool = UserMatchPool::single_candidate(owner, candidate, today, now);
        if let Err(e) = pools.save(&pool).await {
            println!("❌ Error creating UserMatchPools: {}", e);
            std::process::exit(1);
        }
        println!("✅ Created UserMatchPools for {}", owner);
    }

    println!("\n{}", "=".repeat(60));
    println!("🎯 TEST SCENARIO SETUP COMPLETE!");
    println!("📱 Both users can now see each other in discovery");
    println!("👆 User {} will see user {} as a potential match", user1, user2);
    println!("👆 User {} will see user {} as a potential match", user2, user1);
    println!("🔥 When both users LIKE each other, a mutual match should be detected!");
    println!("\n📋 TESTING STEPS:");
    println!("1. Login as user {} and like user {}", user1, user2);
    println!("2. Login as user {} and like user {}", user2, user1);
    println!("3. Check if mutual match is detected and conversation is created");

    Ok(())
}

//! Shows a user's actions and match pool, and whether any candidates remain.

use connect_ops::config::{database, env_or, logging};
use connect_ops::modules::actions::crud::UserActionsCrud;
use connect_ops::modules::match_pool::analysis::PoolAnalysis;
use connect_ops::modules::match_pool::crud::MatchPoolCrud;

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

    let user_id = env_or("DEBUG_USER_ID", "523214175859");
    println!("🔍 Debugging match data for user: {}", user_id);
    println!("{}", "=".repeat(60));

    println!("1️⃣ CHECKING USER ACTIONS:");
    let actions = match UserActionsCrud::new(&store).find(&user_id).await {
        Ok(Some(actions)) => {
            println!("✅ UserActions document exists");
            println!("   - Likes: {} users", actions.likes.len());
            println!("   - Passes: {} users", actions.passes.len());
            println!("   - Matches: {} users", actions.matches.len());
            println!("   - Liked by: {} users", actions.liked_by.len());
            println!("   - Last updated: {}", actions.last_updated_display());
            if !actions.likes.is_empty() {
                println!("   - Liked users: {:?}", actions.likes);
            }
            if !actions.passes.is_empty() {
                println!("   - Passed users: {:?}", actions.passes);
            }
            Some(actions)
        }
        Ok(None) => {
            println!("❌ No userActions document found");
            None
        }
        Err(e) => {
            println!("❌ Error checking userActions: {}", e);
            None
        }
    };

    println!("\n{}", "=".repeat(60));
    println!("2️⃣ CHECKING USER MATCH POOLS:");
    let pool = match MatchPoolCrud::new(&store).find(&user_id).await {
        Ok(Some(pool)) => {
            println!("✅ UserMatchPools document exists");
            println!("   - Daily entries: {}", pool.daily_entries.len());
            println!("   - Last updated: {}", pool.last_updated_display());
            Some(pool)
        }
        Ok(None) => {
            println!("❌ No UserMatchPools document found");
            None
        }
        Err(e) => {
            println!("❌ Error checking UserMatchPools: {}", e);
            None
        }
    };

    let analysis = PoolAnalysis::new(actions.as_ref(), pool.as_ref());

    if let Some(pool) = &pool {
        for (i, (day, entry)) in analysis.days.iter().zip(&pool.daily_entries).enumerate() {
            println!(
                "   - Day {} ({}): {} matches, {} unviewed",
                i + 1,
                day.date,
                day.matches,
                day.unviewed
            );
            if i < 2 {
                for (j, candidate) in entry.matches.iter().enumerate() {
                    println!(
                        "     └ Match {}: {} (viewed: {}, score: {:.2})",
                        j + 1,
                        candidate.match_connect_id,
                        candidate.viewed,
                        candidate.compatibility_score
                    );
                }
            }
        }
        println!(
            "   - TOTAL: {} matches, {} unviewed",
            analysis.total_matches, analysis.unviewed_matches
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("3️⃣ ANALYSIS:");
    println!("   - Total users acted on: {}", analysis.acted_on);
    println!("   - Total available matches: {}", analysis.available);
    println!("   - Unviewed, unacted matches: {}", analysis.unviewed_unacted.len());
    if !analysis.unviewed_unacted.is_empty() {
        println!("   - Available match IDs: {:?}", analysis.unviewed_unacted);
    }
    println!("   - Overlap (acted + available): {}", analysis.overlap);

    if analysis.exhausted() {
        println!("   ⚠️  USER HAS EXHAUSTED ALL AVAILABLE MATCHES");
        println!("   💡 Need to generate new daily matches or reset user actions for testing");
    } else {
        println!("   ✅ User has available matches - check filtering logic");
    }

    Ok(())
}

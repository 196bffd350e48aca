//! Checks two users' action records for a mutual like and likedBy back-fill.

use connect_ops::config::{database, env_or, logging};
use connect_ops::modules::actions::crud::UserActionsCrud;
use connect_ops::modules::actions::matching::{InteractionStatus, MatchDiagnosis};

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
    let crud = UserActionsCrud::new(&store);

    let user1 = env_or("USER_A_ID", "346492379800");
    let user2 = env_or("USER_B_ID", "986949226439");

    println!("🔍 DEBUGGING MUTUAL MATCH DETECTION");
    println!("👤 User 1: {}", user1);
    println!("👤 User 2: {}", user2);
    println!("{}", "=".repeat(60));

    for (user, other) in [(&user1, &user2), (&user2, &user1)] {
        println!("\n🔍 USER ACTIONS FOR: {}", user);
        println!("{}", "-".repeat(40));

        match crud.find(user).await {
            Ok(Some(actions)) => {
                println!("✅ UserActions document exists");
                println!("   📤 Likes (users this user liked): {:?}", actions.likes);
                println!("   📥 Liked By (users who liked this user): {:?}", actions.liked_by);
                println!("   💕 Matches: {:?}", actions.matches);
                println!("   🤔 Has liked {}: {}", other, actions.has_liked(other));
                println!("   🤔 Is liked by {}: {}", other, actions.is_liked_by(other));

                match InteractionStatus::of(&actions, other) {
                    InteractionStatus::Mutual => println!("   🎉 MUTUAL MATCH SHOULD BE DETECTED!"),
                    InteractionStatus::AwaitingReciprocation => {
                        println!("   ⏳ User liked {}, waiting for reciprocation", other)
                    }
                    InteractionStatus::NeedsLikeBack => {
                        println!("   ⏳ User is liked by {}, needs to like back", other)
                    }
                    InteractionStatus::None => println!("   ❌ No mutual interaction yet"),
                }
            }
            Ok(None) => println!("❌ No userActions document found"),
            Err(e) => println!("❌ Error checking userActions: {}", e),
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("🧮 MUTUAL MATCH ANALYSIS:");

    let (actions1, actions2) = match (crud.find_or_empty(&user1).await, crud.find_or_empty(&user2).await) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            println!("❌ Error in mutual match analysis: {}", e);
            std::process::exit(1);
        }
    };

    let diagnosis = MatchDiagnosis::new(&user1, &actions1, &user2, &actions2);
    println!("📊 User1 ({}) likes User2 ({}): {}", user1, user2, diagnosis.a_likes_b);
    println!("📊 User2 ({}) likes User1 ({}): {}", user2, user1, diagnosis.b_likes_a);
    println!("📊 User1's likedBy contains User2: {}", diagnosis.a_liked_by_b);
    println!("📊 User2's likedBy contains User1: {}", diagnosis.b_liked_by_a);

    if diagnosis.mutual() {
        println!("✅ BOTH USERS LIKE EACH OTHER!");
        if diagnosis.backfill_inconsistent() {
            println!("❌ BUG: likedBy arrays not properly updated!");
        } else {
            println!("✅ Mutual match detection should work");
        }
    } else {
        println!("⏳ Mutual like not complete yet");
        if diagnosis.like_from_a_completes_match() {
            println!("💡 A like from {} would complete the match", user1);
        } else if diagnosis.like_from_b_completes_match() {
            println!("💡 A like from {} would complete the match", user2);
        }
    }

    Ok(())
}

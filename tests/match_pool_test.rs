use chrono::{TimeZone, Utc};
use connect_ops::db::memory::MemoryStore;
use connect_ops::modules::actions::crud::UserActionsCrud;
use connect_ops::modules::actions::model::UserActions;
use connect_ops::modules::match_pool::analysis::PoolAnalysis;
use connect_ops::modules::match_pool::crud::MatchPoolCrud;
use connect_ops::modules::match_pool::model::UserMatchPool;
use serde_json::json;

fn sample_pool() -> UserMatchPool {
    serde_json::from_value(json!({
        "connectId": "523214175859",
        "lastUpdated": "2025-03-01T09:00:00Z",
        "dailyEntries": [
            {
                "date": "2025-03-01",
                "matches": [
                    { "matchConnectId": "111", "compatibilityScore": 0.9, "viewed": false },
                    { "matchConnectId": "222", "compatibilityScore": 0.8, "viewed": true },
                    { "matchConnectId": "333", "compatibilityScore": 0.7 }
                ]
            },
            {
                "date": "2025-02-28",
                "matches": [
                    { "matchConnectId": "111", "viewed": false },
                    { "compatibilityScore": 0.5 }
                ]
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_analysis_counts() {
    let actions = UserActions {
        likes: vec!["333".into()],
        passes: vec!["444".into()],
        ..Default::default()
    };
    let pool = sample_pool();

    let analysis = PoolAnalysis::new(Some(&actions), Some(&pool));

    assert_eq!(analysis.days.len(), 2);
    assert_eq!(analysis.days[0].matches, 3);
    assert_eq!(analysis.days[0].unviewed, 2);
    assert_eq!(analysis.days[1].unviewed, 2);
    assert_eq!(analysis.total_matches, 5);
    assert_eq!(analysis.unviewed_matches, 4);
    assert_eq!(analysis.acted_on, 2);
    assert_eq!(analysis.available, 3);
    assert_eq!(analysis.unviewed_unacted, vec!["111", "111"]);
    assert_eq!(analysis.overlap, 1);
    assert!(!analysis.exhausted());
}

#[test]
fn test_exhausted_when_everything_acted_on() {
    let actions = UserActions {
        likes: vec!["111".into()],
        passes: vec!["333".into()],
        ..Default::default()
    };
    let pool = sample_pool();

    let analysis = PoolAnalysis::new(Some(&actions), Some(&pool));
    assert!(analysis.unviewed_unacted.is_empty());
    assert!(analysis.exhausted());
}

#[test]
fn test_missing_documents() {
    let analysis = PoolAnalysis::new(None, None);
    assert_eq!(analysis.total_matches, 0);
    assert_eq!(analysis.available, 0);
    assert!(analysis.exhausted());
}

#[tokio::test]
async fn test_seed_mutual_match_scenario() {
    let store = MemoryStore::new();
    let actions = UserActionsCrud::new(&store);
    let pools = MatchPoolCrud::new(&store);

    actions
        .save("1", &UserActions { likes: vec!["2".into()], ..Default::default() })
        .await
        .unwrap();

    assert!(actions.delete("1").await.unwrap());
    assert!(!actions.delete("2").await.unwrap());

    let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
    for (owner, candidate) in [("1", "2"), ("2", "1")] {
        pools
            .save(&UserMatchPool::single_candidate(owner, candidate, now.date_naive(), now))
            .await
            .unwrap();
    }

    let pool = pools.find("1").await.unwrap().unwrap();
    assert_eq!(pool.daily_entries[0].matches[0].match_connect_id, "2");
    assert_eq!(pool.daily_entries[0].date, "2025-06-10");

    let fresh = actions.find_or_empty("1").await.unwrap();
    let analysis = PoolAnalysis::new(Some(&fresh), Some(&pool));
    assert_eq!(analysis.unviewed_unacted, vec!["2"]);
}

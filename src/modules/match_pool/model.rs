use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const TEST_ALGORITHM_VERSION: &str = "test-v1.0";

/// An explicit `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers and floats (`3.0`). `null` and negatives read as 0.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    Ok(value as u32)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolMatch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_connect_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compatibility_score: f64,
    #[serde(default, deserialize_with = "whole_number")]
    pub stability_rank: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub viewed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compatibility_highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub common_factors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub algorithm_version: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub total_candidates_evaluated: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<PoolMatch>,
}

impl DailyEntry {
    pub fn unviewed(&self) -> usize {
        self.matches.iter().filter(|m| !m.viewed).count()
    }
}

/// Per-user candidate pool, one entry per day, keyed by ConnectID in `UserMatchPools`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMatchPool {
    pub connect_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_entries: Vec<DailyEntry>,
}

impl UserMatchPool {
    /// A pool holding a single unviewed candidate for `date`, used to make two
    /// test users discover each other.
    pub fn single_candidate(owner: &str, candidate: &str, date: NaiveDate, now: DateTime<Utc>) -> Self {
        let candidate = PoolMatch {
            match_connect_id: candidate.to_string(),
            compatibility_score: 0.85,
            stability_rank: 1,
            viewed: false,
            compatibility_highlights: vec![
                "Highly compatible match".to_string(),
                "Similar life goals".to_string(),
            ],
            common_factors: vec![
                "Same geographic area".to_string(),
                "Compatible relationship goals".to_string(),
            ],
        };

        Self {
            connect_id: owner.to_string(),
            last_updated: Some(serde_json::Value::String(
                now.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            daily_entries: vec![DailyEntry {
                date: date.format("%Y-%m-%d").to_string(),
                algorithm_version: TEST_ALGORITHM_VERSION.to_string(),
                total_candidates_evaluated: 1,
                matches: vec![candidate],
            }],
        }
    }

    pub fn last_updated_display(&self) -> String {
        match &self.last_updated {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn single_candidate_pool_shape() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let pool = UserMatchPool::single_candidate("1", "2", now.date_naive(), now);

        let value = serde_json::to_value(&pool).unwrap();
        assert_eq!(value["connectId"], "1");
        assert_eq!(value["lastUpdated"], "2025-03-01T09:30:00.000Z");

        let entry = &value["dailyEntries"][0];
        assert_eq!(entry["date"], "2025-03-01");
        assert_eq!(entry["algorithmVersion"], "test-v1.0");
        assert_eq!(entry["totalCandidatesEvaluated"], 1);
        assert_eq!(entry["matches"][0]["matchConnectId"], "2");
        assert_eq!(entry["matches"][0]["viewed"], false);
        assert_eq!(entry["matches"][0]["stabilityRank"], 1);
    }

    #[test]
    fn nulls_and_float_ranks_are_tolerated() {
        let pool: UserMatchPool = serde_json::from_value(json!({
            "connectId": "1",
            "dailyEntries": [{
                "date": null,
                "totalCandidatesEvaluated": 12.0,
                "matches": [
                    { "matchConnectId": "2", "viewed": null, "stabilityRank": 3.0, "compatibilityScore": null },
                    { "matchConnectId": "3", "viewed": true, "stabilityRank": 2, "commonFactors": null }
                ]
            }]
        }))
        .unwrap();

        let entry = &pool.daily_entries[0];
        assert_eq!(entry.date, "");
        assert_eq!(entry.total_candidates_evaluated, 12);
        assert!(!entry.matches[0].viewed);
        assert_eq!(entry.matches[0].stability_rank, 3);
        assert_eq!(entry.matches[0].compatibility_score, 0.0);
        assert_eq!(entry.matches[1].stability_rank, 2);
        assert!(entry.matches[1].common_factors.is_empty());
        assert_eq!(entry.unviewed(), 1);
    }
}

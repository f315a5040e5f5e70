use super::contest::{ContestDuration, ContestId, ContestRecord, ContestTiming};
use serde::{Deserialize, Serialize};

/// A contest as returned by the clist.by v4 `contest` endpoint.
///
/// Only the fields the announcements use are modelled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClistContest {
    pub id: ContestId,
    pub host: String,
    pub event: String,
    pub start: String,
    /// Seconds, or display text when `format_time` was requested
    pub duration: ContestDuration,
    #[serde(default)]
    pub href: Option<String>,
}

/// Listing wrapper; pagination metadata is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClistContestList {
    pub objects: Vec<ClistContest>,
}

impl From<ClistContest> for ContestRecord {
    fn from(contest: ClistContest) -> Self {
        ContestRecord {
            id: contest.id,
            host: contest.host,
            event: contest.event,
            href: contest.href,
            timing: ContestTiming::Primary {
                start: contest.start,
                duration: contest.duration,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ContestSource;

    #[test]
    fn test_listing_deserializes_with_extra_fields() {
        let json = r#"{
            "meta": {"limit": 1000, "next": null, "offset": 0, "previous": null, "total_count": 2},
            "objects": [
                {
                    "duration": 6000,
                    "end": "2024-01-01T11:40:00",
                    "event": "AtCoder Beginner Contest 400",
                    "host": "atcoder.jp",
                    "href": "https://atcoder.jp/contests/abc400",
                    "id": 52011223,
                    "n_problems": 7,
                    "resource": "atcoder.jp",
                    "resource_id": 93,
                    "start": "2024-01-01T10:00:00"
                },
                {
                    "duration": 5400,
                    "event": "Weekly Contest 390",
                    "host": "leetcode.com",
                    "id": 52011224,
                    "start": "2024-01-02T02:30:00"
                }
            ]
        }"#;

        let list: ClistContestList = serde_json::from_str(json).unwrap();
        assert_eq!(list.objects.len(), 2);
        assert_eq!(list.objects[0].host, "atcoder.jp");
        assert_eq!(list.objects[1].href, None);
    }

    #[test]
    fn test_into_contest_record_is_primary() {
        let contest = ClistContest {
            id: ContestId::Number(1),
            host: "codeforces.com".to_string(),
            event: "Codeforces Round 1000".to_string(),
            start: "2024-01-01T14:35:00".to_string(),
            duration: ContestDuration::Seconds(7200),
            href: Some("https://codeforces.com/contests/2063".to_string()),
        };

        let record: ContestRecord = contest.into();
        assert_eq!(record.source(), ContestSource::Primary);
        assert_eq!(record.duration_text(), "7200");
        assert_eq!(record.start_text(), "2024-01-01T14:35:00");
    }

    #[test]
    fn test_formatted_duration_does_not_break_listing() {
        let json = r#"{"objects": [
            {"id": 1, "host": "atcoder.jp", "event": "ABC 400",
             "start": "06.04 Sun 18:00", "duration": "01:40"},
            {"id": 2, "host": "codechef.com", "event": "Starters 130",
             "start": "06.04 Sun 14:30", "duration": 7200}
        ]}"#;

        let list: ClistContestList = serde_json::from_str(json).unwrap();
        assert_eq!(
            list.objects[0].duration,
            ContestDuration::Text("01:40".to_string())
        );
        assert_eq!(list.objects[1].duration, ContestDuration::Seconds(7200));
    }
}

use crate::constants::ALLOWED_HOSTS;
use crate::data_fetcher::models::ContestRecord;

/// Whether contests hosted on `host` are announced.
pub fn is_allowed_host(host: &str) -> bool {
    ALLOWED_HOSTS.contains(&host)
}

/// Keeps only contests on whitelisted hosts, in their original order.
///
/// Host comparison is exact; `www.codeforces.com` is not `codeforces.com`.
pub fn filter_contests(contests: Vec<ContestRecord>) -> Vec<ContestRecord> {
    contests
        .into_iter()
        .filter(|contest| is_allowed_host(&contest.host))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{ContestDuration, ContestId, ContestTiming};

    fn contest(id: i64, host: &str) -> ContestRecord {
        ContestRecord {
            id: ContestId::Number(id),
            host: host.to_string(),
            event: format!("Contest {id}"),
            href: None,
            timing: ContestTiming::Primary {
                start: "2024-01-01T10:00:00".to_string(),
                duration: ContestDuration::Seconds(3600),
            },
        }
    }

    fn ids(contests: &[ContestRecord]) -> Vec<ContestId> {
        contests.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_contests(vec![]).is_empty());
    }

    #[test]
    fn test_keeps_whitelisted_in_order() {
        let input = vec![
            contest(1, "leetcode.com"),
            contest(2, "codeforces.com"),
            contest(3, "atcoder.jp"),
            contest(4, "topcoder.com"),
            contest(5, "codechef.com"),
            contest(6, "vjudge.net"),
            contest(7, "codeforces.com"),
        ];

        let filtered = filter_contests(input);
        assert_eq!(
            ids(&filtered),
            vec![2, 3, 5, 6, 7]
                .into_iter()
                .map(ContestId::Number)
                .collect::<Vec<_>>()
        );
        assert!(filtered.iter().all(|c| is_allowed_host(&c.host)));
    }

    #[test]
    fn test_host_match_is_exact() {
        let input = vec![
            contest(1, "www.codeforces.com"),
            contest(2, "AtCoder.jp"),
            contest(3, "codechef.com/"),
        ];
        assert!(filter_contests(input).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            contest(1, "atcoder.jp"),
            contest(2, "leetcode.com"),
            contest(3, "codechef.com"),
        ];

        let once = filter_contests(input);
        let twice = filter_contests(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_subsequence_and_complete() {
        let hosts = [
            "atcoder.jp",
            "hackerrank.com",
            "vjudge.net",
            "vjudge.net",
            "codingcompetitions.withgoogle.com",
            "codechef.com",
        ];
        let input: Vec<_> = hosts
            .iter()
            .enumerate()
            .map(|(i, h)| contest(i as i64, h))
            .collect();

        let filtered = filter_contests(input.clone());

        // every kept element appears in input order
        let mut cursor = input.iter();
        for kept in &filtered {
            assert!(cursor.any(|c| c == kept));
        }
        // every whitelisted input element is kept
        let expected = input.iter().filter(|c| is_allowed_host(&c.host)).count();
        assert_eq!(filtered.len(), expected);
    }
}

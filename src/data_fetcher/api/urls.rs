//! URL building utilities for API endpoints

/// Builds the primary contest listing URL.
///
/// # Example
/// ```
/// use contest_reminder::data_fetcher::api::build_contest_list_url;
///
/// let url = build_contest_list_url("https://clist.by:443/api/v4");
/// assert_eq!(url, "https://clist.by:443/api/v4/contest/");
/// ```
pub fn build_contest_list_url(api_base_url: &str) -> String {
    format!("{}/contest/", api_base_url.trim_end_matches('/'))
}

/// Builds the primary URL for a single contest.
///
/// # Example
/// ```
/// use contest_reminder::data_fetcher::api::build_contest_url;
///
/// let url = build_contest_url("https://clist.by:443/api/v4/", "52011223");
/// assert_eq!(url, "https://clist.by:443/api/v4/contest/52011223");
/// ```
pub fn build_contest_url(api_base_url: &str, contest_id: &str) -> String {
    format!(
        "{}/contest/{}",
        api_base_url.trim_end_matches('/'),
        contest_id.trim()
    )
}

/// Builds the secondary site's contest listing URL.
///
/// # Example
/// ```
/// use contest_reminder::data_fetcher::api::build_secondary_listing_url;
///
/// let url = build_secondary_listing_url("https://vjudge.net");
/// assert_eq!(url, "https://vjudge.net/contest/data");
/// ```
pub fn build_secondary_listing_url(secondary_base_url: &str) -> String {
    format!("{}/contest/data", secondary_base_url.trim_end_matches('/'))
}

/// Builds the public page link for a secondary contest.
///
/// # Example
/// ```
/// use contest_reminder::data_fetcher::api::build_secondary_contest_url;
///
/// let url = build_secondary_contest_url("https://vjudge.net", "701234");
/// assert_eq!(url, "https://vjudge.net/contest/701234");
/// ```
pub fn build_secondary_contest_url(secondary_base_url: &str, contest_id: &str) -> String {
    format!(
        "{}/contest/{}",
        secondary_base_url.trim_end_matches('/'),
        contest_id
    )
}

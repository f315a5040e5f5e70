//! Primary source: clist.by contest API

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::{build_contest_list_url, build_contest_url};
use crate::config::{Config, Credentials};
use crate::constants::primary;
use crate::data_fetcher::models::{ClistContest, ClistContestList, ContestRecord};
use crate::data_fetcher::processors::upcoming_window_end;
use crate::error::AppError;

/// The three request shapes sent to the primary API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContestQuery {
    /// Up to 1000 upcoming contests, newest start first
    Listing,
    /// Upcoming contests ending no later than the given `%Y-%m-%dT%H:%M:%S` bound
    EndingBefore(String),
    /// One contest by id
    Single(String),
}

impl ContestQuery {
    /// Upcoming contests ending within the next 48 hours of `now`.
    pub fn upcoming(now: DateTime<Utc>) -> Self {
        ContestQuery::EndingBefore(upcoming_window_end(now, primary::UPCOMING_WINDOW_HOURS))
    }

    pub fn url(&self, api_base_url: &str) -> String {
        match self {
            ContestQuery::Listing | ContestQuery::EndingBefore(_) => {
                build_contest_list_url(api_base_url)
            }
            ContestQuery::Single(id) => build_contest_url(api_base_url, id),
        }
    }

    /// Credentials first, then the shape-specific parameters.
    pub fn params(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
        let mut params = credentials.query_pairs().to_vec();
        match self {
            ContestQuery::Listing => {
                params.push(("upcoming", "true".to_string()));
                params.push(("format_time", "true".to_string()));
                params.push(("limit", primary::LISTING_LIMIT.to_string()));
                params.push(("order_by", primary::LISTING_ORDER.to_string()));
            }
            ContestQuery::EndingBefore(end) => {
                params.push(("upcoming", "true".to_string()));
                params.push(("format_time", "true".to_string()));
                params.push(("end__lte", end.clone()));
            }
            ContestQuery::Single(_) => {}
        }
        params
    }
}

/// Fetches the contests matching a listing query, unfiltered and in API order.
///
/// Single-contest lookups go through [`fetch_contest`].
#[instrument(skip(client, config, credentials))]
pub async fn fetch_contest_list(
    client: &Client,
    config: &Config,
    credentials: &Credentials,
    query: &ContestQuery,
) -> Result<Vec<ContestRecord>, AppError> {
    let url = query.url(&config.api_base_url);
    let params = query.params(credentials);
    let list: ClistContestList = fetch(client, &url, &params).await?;

    info!("Primary API returned {} contests", list.objects.len());
    Ok(list.objects.into_iter().map(ContestRecord::from).collect())
}

/// Fetches a single contest by id.
#[instrument(skip(client, config, credentials))]
pub async fn fetch_contest(
    client: &Client,
    config: &Config,
    credentials: &Credentials,
    contest_id: &str,
) -> Result<ContestRecord, AppError> {
    let query = ContestQuery::Single(contest_id.to_string());
    let url = query.url(&config.api_base_url);
    let params = query.params(credentials);
    let contest: ClistContest = fetch(client, &url, &params).await?;
    Ok(contest.into())
}

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, warn};

use super::clist::{self, ContestQuery};
use super::http_client::create_http_client_with_timeout;
use super::vjudge::{self, SecondaryOutcome};
use crate::config::{Config, Credentials};
use crate::data_fetcher::models::ContestRecord;
use crate::data_fetcher::processors::DisplayZone;
use crate::error::AppError;

/// Entry point for every network request of one invocation.
///
/// Owns the HTTP client together with the configuration and credentials it was
/// built from, so callers never pass credentials around themselves.
#[derive(Debug, Clone)]
pub struct ContestApi {
    client: Client,
    config: Config,
    credentials: Credentials,
}

impl ContestApi {
    pub fn new(config: Config, credentials: Credentials) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        debug!(
            "Contest API ready: primary={}, secondary={}, timeout={}s",
            config.api_base_url, config.secondary_base_url, config.http_timeout_seconds
        );
        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    /// Runs one primary query and returns its records unfiltered.
    pub async fn fetch_contest_list(
        &self,
        query: &ContestQuery,
    ) -> Result<Vec<ContestRecord>, AppError> {
        clist::fetch_contest_list(&self.client, &self.config, &self.credentials, query).await
    }

    pub async fn fetch_contest(&self, contest_id: &str) -> Result<ContestRecord, AppError> {
        clist::fetch_contest(&self.client, &self.config, &self.credentials, contest_id).await
    }

    /// Looks up the bonus contest, propagating request and row errors.
    pub async fn fetch_bonus_contest(
        &self,
        now: DateTime<Utc>,
        display_tz: &DisplayZone,
    ) -> Result<SecondaryOutcome, AppError> {
        vjudge::fetch_bonus_contest(&self.client, &self.config, now, display_tz).await
    }

    /// Like [`fetch_bonus_contest`](Self::fetch_bonus_contest), but any error
    /// collapses to `None` so the secondary source never fails a command.
    pub async fn upcoming_bonus_contest(
        &self,
        now: DateTime<Utc>,
        display_tz: &DisplayZone,
    ) -> Option<ContestRecord> {
        match self.fetch_bonus_contest(now, display_tz).await {
            Ok(outcome) => outcome.found(),
            Err(e) => {
                warn!("Secondary source unavailable, skipping bonus contest: {e}");
                None
            }
        }
    }
}

//! Secondary source: the latest vjudge contest of a fixed owner
//!
//! The listing endpoint returns positional rows. Only the most recent row is
//! considered, and it is offered as a bonus entry only while it has not started.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::urls::{build_secondary_contest_url, build_secondary_listing_url};
use crate::config::Config;
use crate::constants::{secondary, time_formats};
use crate::data_fetcher::models::vjudge::columns;
use crate::data_fetcher::models::{ContestId, ContestRecord, ContestTiming, VjudgeListing};
use crate::data_fetcher::processors::{DisplayZone, format_epoch_ms};
use crate::error::AppError;

/// Why no bonus contest is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The listing had no rows
    Empty,
    /// The latest contest has already started
    Stale { start_ms: i64 },
}

/// Result of looking up the bonus contest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryOutcome {
    Found(ContestRecord),
    NotFound(NotFoundReason),
}

impl SecondaryOutcome {
    pub fn found(self) -> Option<ContestRecord> {
        match self {
            SecondaryOutcome::Found(contest) => Some(contest),
            SecondaryOutcome::NotFound(_) => None,
        }
    }
}

/// Query parameters for the owner's listing, newest first.
pub fn secondary_listing_params(owner: &str) -> Vec<(&'static str, String)> {
    vec![
        ("draw", "1".to_string()),
        ("start", "0".to_string()),
        ("length", secondary::PAGE_LENGTH.to_string()),
        ("sortDir", "desc".to_string()),
        ("sortCol", "0".to_string()),
        ("category", "all".to_string()),
        ("running", "0".to_string()),
        ("title", String::new()),
        ("owner", owner.to_string()),
    ]
}

/// Turns one listing row into the bonus contest, applying the future cutoff.
///
/// `now_ms` is the capture time in epoch milliseconds; the contest is `Found`
/// only when `now_ms` is strictly before its start.
pub fn parse_bonus_row(
    row: &[Value],
    now_ms: i64,
    display_tz: &DisplayZone,
    secondary_base_url: &str,
    source_url: &str,
) -> Result<SecondaryOutcome, AppError> {
    let column = |index: usize, name: &str| {
        row.get(index).ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("row has {} columns, missing {name} at {index}", row.len()),
                source_url,
            )
        })
    };
    let millis = |index: usize, name: &str| -> Result<i64, AppError> {
        column(index, name)?.as_i64().ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("{name} at column {index} is not an integer"),
                source_url,
            )
        })
    };

    let id: ContestId = serde_json::from_value(column(columns::ID, "id")?.clone())
        .map_err(|e| {
            AppError::api_unexpected_structure(format!("contest id: {e}"), source_url)
        })?;
    let title = column(columns::TITLE, "title")?
        .as_str()
        .ok_or_else(|| {
            AppError::api_unexpected_structure("title is not a string", source_url)
        })?
        .to_string();
    let start_ms = millis(columns::BEGIN_MS, "begin time")?;
    let end_ms = millis(columns::END_MS, "end time")?;

    let duration_ms = end_ms.checked_sub(start_ms).ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("contest length overflows: begin {start_ms}, end {end_ms}"),
            source_url,
        )
    })?;
    let duration_hours = duration_ms.div_euclid(secondary::MS_PER_HOUR);
    let start_display = format_epoch_ms(start_ms, display_tz, time_formats::SECONDARY_LISTING)?;

    if now_ms >= start_ms {
        debug!("Secondary contest {id} started at {start_ms}, now {now_ms}");
        return Ok(SecondaryOutcome::NotFound(NotFoundReason::Stale { start_ms }));
    }

    let href = build_secondary_contest_url(secondary_base_url, &id.to_string());
    Ok(SecondaryOutcome::Found(ContestRecord {
        id,
        host: secondary::HOST.to_string(),
        event: title,
        href: Some(href),
        timing: ContestTiming::Secondary {
            start_display,
            duration_hours,
            start_ms,
            unix_time: now_ms,
        },
    }))
}

/// Picks the first listing row, or `NotFound(Empty)` when there is none.
pub fn bonus_from_listing(
    listing: &VjudgeListing,
    now_ms: i64,
    display_tz: &DisplayZone,
    secondary_base_url: &str,
    source_url: &str,
) -> Result<SecondaryOutcome, AppError> {
    match listing.data.first() {
        Some(row) => parse_bonus_row(row, now_ms, display_tz, secondary_base_url, source_url),
        None => Ok(SecondaryOutcome::NotFound(NotFoundReason::Empty)),
    }
}

/// Fetches the owner's latest contest and returns it if it is still upcoming.
#[instrument(skip(client, config, display_tz))]
pub async fn fetch_bonus_contest(
    client: &Client,
    config: &Config,
    now: DateTime<Utc>,
    display_tz: &DisplayZone,
) -> Result<SecondaryOutcome, AppError> {
    let url = build_secondary_listing_url(&config.secondary_base_url);
    let params = secondary_listing_params(&config.secondary_owner);
    let listing: VjudgeListing = fetch(client, &url, &params).await?;

    let outcome = bonus_from_listing(
        &listing,
        now.timestamp_millis(),
        display_tz,
        &config.secondary_base_url,
        &url,
    )?;
    info!("Secondary source outcome: {}", describe(&outcome));
    Ok(outcome)
}

fn describe(outcome: &SecondaryOutcome) -> String {
    match outcome {
        SecondaryOutcome::Found(contest) => format!("found {}", contest.id),
        SecondaryOutcome::NotFound(NotFoundReason::Empty) => "no rows".to_string(),
        SecondaryOutcome::NotFound(NotFoundReason::Stale { start_ms }) => {
            format!("latest contest already started ({start_ms})")
        }
    }
}

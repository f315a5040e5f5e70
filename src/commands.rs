use crate::cli::Args;
use crate::config::{Config, Credentials};
use crate::constants::messages;
use crate::data_fetcher::{ContestApi, ContestQuery, ContestRecord, filter_contests};
use crate::error::AppError;
use crate::presenter::{Presenter, render_listing};
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::{error, info, warn};

/// A positional verb together with its optional contest id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No verb given
    Help,
    View,
    Details(Option<String>),
    Upcoming,
    Unknown(String),
}

impl Command {
    pub fn parse(verb: Option<&str>, contest_id: Option<&str>) -> Self {
        match verb {
            None => Command::Help,
            Some("view") => Command::View,
            Some("details") => Command::Details(contest_id.map(str::to_string)),
            Some("upcoming") => Command::Upcoming,
            Some(other) => Command::Unknown(other.to_string()),
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::parse(args.command.as_deref(), args.contest_id.as_deref())
    }
}

/// Runs one verb, writing everything user-facing to `out`.
///
/// Request and formatting failures are reported on `out` and are not errors;
/// only a failing writer is.
pub async fn run_command<W: Write>(
    command: &Command,
    api: &ContestApi,
    presenter: &Presenter,
    out: &mut W,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    info!("Running command {command:?}");
    match command {
        Command::Help => {
            writeln!(out, "{}", messages::USAGE)?;
            writeln!(out, "{}", messages::AVAILABLE_COMMANDS)?;
        }
        Command::View => handle_listing(&ContestQuery::Listing, api, presenter, out, now).await?,
        Command::Upcoming => {
            handle_listing(&ContestQuery::upcoming(now), api, presenter, out, now).await?
        }
        Command::Details(None) => writeln!(out, "{}", messages::MISSING_CONTEST_ID)?,
        Command::Details(Some(contest_id)) => {
            handle_details(contest_id, api, presenter, out, now).await?
        }
        Command::Unknown(verb) => {
            warn!("Unknown command '{verb}'");
            writeln!(out, "{}", messages::AVAILABLE_COMMANDS)?;
        }
    }
    Ok(())
}

/// Handles `view` and `upcoming`: primary query, whitelist filter, then the
/// bonus contest appended when it is still upcoming.
pub async fn handle_listing<W: Write>(
    query: &ContestQuery,
    api: &ContestApi,
    presenter: &Presenter,
    out: &mut W,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let contests = match api.fetch_contest_list(query).await {
        Ok(contests) => contests,
        Err(e) => {
            error!("Primary listing failed: {e}");
            writeln!(out, "{}", messages::REQUEST_FAILED)?;
            return Ok(());
        }
    };

    let fetched = contests.len();
    let mut contests: Vec<ContestRecord> = filter_contests(contests);
    info!("Kept {} of {fetched} contests after host filter", contests.len());

    if let Some(bonus) = api.upcoming_bonus_contest(now, &presenter.display_tz).await {
        contests.push(bonus);
    }

    render_listing(out, &contests)?;
    Ok(())
}

/// Handles `details <id>`, falling back to the bonus contest when the lookup fails.
pub async fn handle_details<W: Write>(
    contest_id: &str,
    api: &ContestApi,
    presenter: &Presenter,
    out: &mut W,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    match api.fetch_contest(contest_id).await {
        Ok(contest) => {
            if let Err(e) = presenter.render_announcement(out, &contest) {
                if matches!(e, AppError::Io(_)) {
                    return Err(e);
                }
                warn!("Could not format contest {}: {e}", contest.id);
                writeln!(out, "Could not format contest {}: {e}", contest.id)?;
            }
        }
        Err(e) => {
            warn!("Details lookup for {contest_id} failed, trying secondary source: {e}");
            match api.upcoming_bonus_contest(now, &presenter.display_tz).await {
                Some(bonus) => {
                    if let Err(e) = presenter.render_secondary_announcement(out, &bonus) {
                        if matches!(e, AppError::Io(_)) {
                            return Err(e);
                        }
                        warn!("Could not format contest {}: {e}", bonus.id);
                        writeln!(out, "Could not format contest {}: {e}", bonus.id)?;
                    }
                }
                None => info!("No upcoming bonus contest to announce instead"),
            }
        }
    }
    Ok(())
}

/// Handles `--list-config`. Credentials are optional here so the command also
/// works before they are exported.
pub fn handle_list_config_command<W: Write>(config: &Config, out: &mut W) -> Result<(), AppError> {
    let credentials = Credentials::from_env().ok();
    config.write_summary(out, &Config::get_config_path(), credentials.as_ref())?;
    Ok(())
}

/// Handles `--set-log-file` and `--clear-log-file`.
///
/// Reads the stored file (not the environment-overridden view) so that
/// overrides are never persisted.
pub async fn handle_config_update_command<W: Write>(
    args: &Args,
    config_path: &str,
    out: &mut W,
) -> Result<(), AppError> {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load_from_path(config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        writeln!(out, "Custom log file path cleared. Using default location.")?;
    }

    config.validate()?;
    config.save_to_path(config_path).await?;
    writeln!(out, "Config updated successfully!")?;

    Ok(())
}

//! Competitive programming contest reminder
//!
//! Fetches upcoming contests from clist.by, keeps the ones hosted on a few
//! whitelisted judges, optionally adds the newest vjudge contest of a fixed
//! owner, and renders them as listings or reminder announcements.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use contest_reminder::config::{Config, Credentials};
//! use contest_reminder::data_fetcher::{ContestApi, ContestQuery, filter_contests};
//! use contest_reminder::data_fetcher::processors::DisplayZone;
//! use contest_reminder::presenter::render_listing;
//! use contest_reminder::error::AppError;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let api = ContestApi::new(Config::load().await?, Credentials::from_env()?)?;
//!
//!     let now = Utc::now();
//!     let mut contests = filter_contests(api.fetch_contest_list(&ContestQuery::upcoming(now)).await?);
//!     if let Some(bonus) = api.upcoming_bonus_contest(now, &DisplayZone::Local).await {
//!         contests.push(bonus);
//!     }
//!
//!     render_listing(&mut std::io::stdout(), &contests)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod presenter;

// Re-export commonly used types for convenience
pub use config::{Config, Credentials};
pub use data_fetcher::{
    ContestApi, ContestQuery, ContestRecord, SecondaryOutcome, convert_timestring,
    filter_contests,
};
pub use error::AppError;
pub use presenter::{Presenter, render_listing};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

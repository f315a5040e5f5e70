//! Text rendering for contest listings and announcements
//!
//! Everything here writes plain text to a `std::io::Write`; nothing touches the
//! network or the clock.

mod announcement;
mod listing;

use crate::config::Config;
use crate::data_fetcher::processors::DisplayZone;

pub use announcement::Announcement;
pub use listing::render_listing;

/// Settings shared by the announcement templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presenter {
    pub greeting: String,
    pub time_offset_hours: i64,
    /// Timezone for epoch-millisecond timestamps of the secondary source
    pub display_tz: DisplayZone,
}

impl Presenter {
    pub fn new(greeting: impl Into<String>, time_offset_hours: i64, display_tz: DisplayZone) -> Self {
        Self {
            greeting: greeting.into(),
            time_offset_hours,
            display_tz,
        }
    }

    pub fn from_config(config: &Config, display_tz: DisplayZone) -> Self {
        Self::new(config.greeting.clone(), config.time_offset_hours, display_tz)
    }
}

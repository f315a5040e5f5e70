use serde::{Deserialize, Serialize};
use std::fmt;

/// Contest identifier. Numeric on clist.by, but kept opaque because other
/// sources are free to use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContestId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContestId::Number(n) => write!(f, "{n}"),
            ContestId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ContestId {
    fn from(value: i64) -> Self {
        ContestId::Number(value)
    }
}

impl From<&str> for ContestId {
    fn from(value: &str) -> Self {
        ContestId::Text(value.to_string())
    }
}

/// Duration as the primary API sent it: seconds, or whatever text it
/// produced when asked to format times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContestDuration {
    Seconds(i64),
    Text(String),
}

impl ContestDuration {
    pub fn seconds(&self) -> Option<i64> {
        match self {
            ContestDuration::Seconds(seconds) => Some(*seconds),
            ContestDuration::Text(_) => None,
        }
    }
}

impl fmt::Display for ContestDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContestDuration::Seconds(seconds) => write!(f, "{seconds}"),
            ContestDuration::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for ContestDuration {
    fn from(seconds: i64) -> Self {
        ContestDuration::Seconds(seconds)
    }
}

/// Which feed a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestSource {
    Primary,
    Secondary,
}

/// Start and duration in the shape the source delivered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContestTiming {
    Primary {
        /// `YYYY-MM-DDTHH:MM:SS`, or a display string when the API formatted it
        start: String,
        duration: ContestDuration,
    },
    Secondary {
        /// Already formatted for display (`%d.%m %a %H:%M`)
        start_display: String,
        duration_hours: i64,
        start_ms: i64,
        /// Wall-clock time at capture, epoch milliseconds
        unix_time: i64,
    },
}

/// One contest, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestRecord {
    pub id: ContestId,
    pub host: String,
    pub event: String,
    pub href: Option<String>,
    pub timing: ContestTiming,
}

impl ContestRecord {
    pub fn source(&self) -> ContestSource {
        match self.timing {
            ContestTiming::Primary { .. } => ContestSource::Primary,
            ContestTiming::Secondary { .. } => ContestSource::Secondary,
        }
    }

    /// Start time exactly as carried, without any conversion.
    pub fn start_text(&self) -> &str {
        match &self.timing {
            ContestTiming::Primary { start, .. } => start,
            ContestTiming::Secondary { start_display, .. } => start_display,
        }
    }

    /// Duration as shown in listings: the raw primary value, or
    /// `"{n} hours"` for secondary records.
    pub fn duration_text(&self) -> String {
        match &self.timing {
            ContestTiming::Primary { duration, .. } => duration.to_string(),
            ContestTiming::Secondary { duration_hours, .. } => format!("{duration_hours} hours"),
        }
    }

    pub fn href_or_empty(&self) -> &str {
        self.href.as_deref().unwrap_or_default()
    }
}

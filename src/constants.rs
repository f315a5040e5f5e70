//! Application-wide constants and configuration defaults
//!
//! Endpoints, query values and text formats live here so the fetchers and the
//! presenter agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Hosting platforms whose contests are announced. Everything else is dropped.
pub const ALLOWED_HOSTS: [&str; 4] = ["atcoder.jp", "codeforces.com", "codechef.com", "vjudge.net"];

/// Primary source (clist.by) defaults
pub mod primary {
    /// Base URL of the contest API, without trailing slash
    pub const DEFAULT_BASE_URL: &str = "https://clist.by:443/api/v4";

    /// Page size requested by the `view` listing
    pub const LISTING_LIMIT: u32 = 1000;

    /// Ordering requested by the `view` listing (newest start first)
    pub const LISTING_ORDER: &str = "-start";

    /// Window used by the `upcoming` listing
    pub const UPCOMING_WINDOW_HOURS: i64 = 48;

    /// Hours added to primary start times before display
    pub const DEFAULT_TIME_OFFSET_HOURS: i64 = 6;
}

/// Secondary source (vjudge.net) defaults
pub mod secondary {
    /// Base URL of the secondary site, without trailing slash
    pub const DEFAULT_BASE_URL: &str = "https://vjudge.net";

    /// Contest owner whose latest contest becomes the bonus entry
    pub const DEFAULT_OWNER: &str = "ICPC_Bot";

    /// Host name stamped on secondary records
    pub const HOST: &str = "vjudge.net";

    /// Rows requested from the listing endpoint
    pub const PAGE_LENGTH: u32 = 20;

    /// Milliseconds per hour, used for the floor-hours duration
    pub const MS_PER_HOUR: i64 = 3_600_000;

    /// Fixed duration assumed by the fallback announcement
    pub const FALLBACK_DURATION_HOURS: i64 = 1;
    pub const FALLBACK_DURATION_MINUTES: i64 = 0;
}

/// chrono format strings
pub mod time_formats {
    /// Timestamps returned by the primary API when `format_time` is off
    pub const PRIMARY_INPUT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Announcement start time, e.g. `04:00 PM 01-Jan`
    pub const ANNOUNCEMENT: &str = "%I:%M %p %d-%b";

    /// Secondary listing start time, e.g. `05.03 Tue 19:00`
    pub const SECONDARY_LISTING: &str = "%d.%m %a %H:%M";

    /// `end__lte` filter value
    pub const QUERY_BOUND: &str = "%Y-%m-%dT%H:%M:%S";
}

/// Announcement text defaults
pub mod announcement {
    pub const DEFAULT_GREETING: &str = "Assalamu alaikum everyone.";
}

/// User-facing messages printed on stdout
pub mod messages {
    pub const REQUEST_FAILED: &str = "Request Failed!";
    pub const MISSING_CONTEST_ID: &str = "Please provide contest id";
    pub const AVAILABLE_COMMANDS: &str = "Available flags: view, details, upcoming";
    pub const USAGE: &str = "Usage: contest_reminder <view | details <CONTEST_ID> | upcoming>";
}

/// Environment variable names
pub mod env_vars {
    /// Primary API user name (required)
    pub const USERNAME: &str = "CLIST_USER";

    /// Primary API key (required)
    pub const API_KEY: &str = "CLIST_API_KEY";

    /// Override for the primary API base URL
    pub const API_BASE_URL: &str = "CONTEST_REMINDER_API_BASE_URL";

    /// Override for the secondary site base URL
    pub const SECONDARY_BASE_URL: &str = "CONTEST_REMINDER_SECONDARY_BASE_URL";

    /// Override for the log file path
    pub const LOG_FILE: &str = "CONTEST_REMINDER_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "CONTEST_REMINDER_HTTP_TIMEOUT";
}

/// Name used for the config directory and default log file
pub const APP_DIR_NAME: &str = "contest_reminder";
pub const LOG_FILE_NAME: &str = "contest_reminder.log";

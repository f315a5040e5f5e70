pub mod clist;
mod core;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;
pub mod vjudge;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the request facade and query/outcome types
pub use clist::ContestQuery;
pub use self::core::ContestApi;
pub use vjudge::{NotFoundReason, SecondaryOutcome, parse_bonus_row};

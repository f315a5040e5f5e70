pub mod filter;
pub mod time_formatting;

pub use filter::{filter_contests, is_allowed_host};
pub use time_formatting::{
    DisplayZone, convert_timestring, format_epoch_ms, split_duration, upcoming_window_end,
};

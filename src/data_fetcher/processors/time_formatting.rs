use crate::constants::time_formats;
use crate::error::AppError;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, Offset, Utc};

/// Converts a primary-source timestamp into announcement form.
///
/// The input must match `YYYY-MM-DDTHH:MM:SS` exactly. `offset_hours` is added
/// before formatting as `hh:mm AM/PM dd-Mon`.
///
/// # Examples
///
/// ```
/// use contest_reminder::data_fetcher::processors::convert_timestring;
///
/// let shown = convert_timestring("2024-01-01T10:00:00", 6).unwrap();
/// assert_eq!(shown, "04:00 PM 01-Jan");
/// ```
pub fn convert_timestring(time_string: &str, offset_hours: i64) -> Result<String, AppError> {
    let parsed = NaiveDateTime::parse_from_str(time_string, time_formats::PRIMARY_INPUT)
        .map_err(|e| {
            AppError::datetime_parse_error(format!("invalid start time '{time_string}': {e}"))
        })?;

    let shifted = parsed
        .checked_add_signed(Duration::hours(offset_hours))
        .ok_or_else(|| {
            AppError::datetime_parse_error(format!(
                "start time '{time_string}' out of range after {offset_hours}h offset"
            ))
        })?;

    Ok(shifted.format(time_formats::ANNOUNCEMENT).to_string())
}

/// Timezone used to show epoch timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// System local time; the UTC offset is looked up per timestamp, so
    /// daylight-saving changes are honoured
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }
}

/// Formats epoch milliseconds in the given zone.
pub fn format_epoch_ms(ms: i64, zone: &DisplayZone, format: &str) -> Result<String, AppError> {
    let instant = DateTime::<Utc>::from_timestamp_millis(ms).ok_or_else(|| {
        AppError::datetime_parse_error(format!("epoch milliseconds out of range: {ms}"))
    })?;
    Ok(match zone {
        DisplayZone::Local => instant.with_timezone(&Local).format(format).to_string(),
        DisplayZone::Fixed(offset) => instant.with_timezone(offset).format(format).to_string(),
    })
}

/// Splits seconds into whole hours and the remaining whole minutes.
pub fn split_duration(seconds: i64) -> (i64, i64) {
    (seconds / 3600, (seconds % 3600) / 60)
}

/// `end__lte` value for the upcoming window starting at `now`.
pub fn upcoming_window_end(now: DateTime<Utc>, window_hours: i64) -> String {
    (now + Duration::hours(window_hours))
        .format(time_formats::QUERY_BOUND)
        .to_string()
}

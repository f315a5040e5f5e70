use std::io::Write;

use super::Presenter;
use crate::constants::{secondary, time_formats};
use crate::data_fetcher::models::{ContestRecord, ContestTiming};
use crate::data_fetcher::processors::{
    DisplayZone, convert_timestring, format_epoch_ms, split_duration,
};
use crate::error::AppError;

/// Values substituted into the announcement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub event: String,
    pub starts_at: String,
    pub hours: i64,
    pub minutes: i64,
    pub link: String,
}

impl Announcement {
    /// Builds the announcement for a looked-up contest.
    ///
    /// Primary starts go through the timestring converter, secondary starts are
    /// already formatted. A primary duration that is not whole seconds is an
    /// error, like an unreadable start.
    pub fn for_contest(contest: &ContestRecord, time_offset_hours: i64) -> Result<Self, AppError> {
        let (starts_at, hours, minutes) = match &contest.timing {
            ContestTiming::Primary { start, duration } => {
                let seconds = duration.seconds().ok_or_else(|| {
                    AppError::datetime_parse_error(format!(
                        "duration '{duration}' is not a number of seconds"
                    ))
                })?;
                let (hours, minutes) = split_duration(seconds);
                (convert_timestring(start, time_offset_hours)?, hours, minutes)
            }
            ContestTiming::Secondary {
                start_display,
                duration_hours,
                ..
            } => (start_display.clone(), *duration_hours, 0),
        };

        Ok(Self {
            event: contest.event.clone(),
            starts_at,
            hours,
            minutes,
            link: contest.href_or_empty().to_string(),
        })
    }

    /// Builds the fallback announcement for the bonus contest: the start is the
    /// capture time and the duration is fixed.
    pub fn for_bonus_fallback(contest: &ContestRecord, display_tz: &DisplayZone) -> Result<Self, AppError> {
        let captured_ms = match &contest.timing {
            ContestTiming::Secondary { unix_time, .. } => *unix_time,
            ContestTiming::Primary { .. } => {
                return Err(AppError::datetime_parse_error(format!(
                    "contest {} has no capture time",
                    contest.id
                )));
            }
        };

        Ok(Self {
            event: contest.event.clone(),
            starts_at: format_epoch_ms(captured_ms, display_tz, time_formats::ANNOUNCEMENT)?,
            hours: secondary::FALLBACK_DURATION_HOURS,
            minutes: secondary::FALLBACK_DURATION_MINUTES,
            link: contest.href_or_empty().to_string(),
        })
    }

    pub fn to_text(&self, greeting: &str) -> String {
        format!(
            "{greeting}\n\nContest reminder for {}\nStarts at: {}\nDuration: {} hours {} minutes\nLink: {}\n",
            self.event, self.starts_at, self.hours, self.minutes, self.link
        )
    }
}

impl Presenter {
    /// Writes the announcement for a looked-up contest.
    ///
    /// Nothing is written when the start time cannot be converted; the error is
    /// returned for the caller to report.
    pub fn render_announcement<W: Write>(
        &self,
        out: &mut W,
        contest: &ContestRecord,
    ) -> Result<(), AppError> {
        let announcement = Announcement::for_contest(contest, self.time_offset_hours)?;
        out.write_all(announcement.to_text(&self.greeting).as_bytes())?;
        Ok(())
    }

    /// Writes the fallback announcement used when a details lookup failed but
    /// the bonus contest is upcoming.
    pub fn render_secondary_announcement<W: Write>(
        &self,
        out: &mut W,
        contest: &ContestRecord,
    ) -> Result<(), AppError> {
        let announcement = Announcement::for_bonus_fallback(contest, &self.display_tz)?;
        out.write_all(announcement.to_text(&self.greeting).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{ContestDuration, ContestId};

    fn presenter() -> Presenter {
        Presenter::new("Assalamu alaikum everyone.", 6, DisplayZone::utc())
    }

    fn primary(start: &str, duration_seconds: i64) -> ContestRecord {
        ContestRecord {
            id: ContestId::Number(52011223),
            host: "codeforces.com".to_string(),
            event: "Codeforces Round 1000".to_string(),
            href: Some("https://codeforces.com/contests/2063".to_string()),
            timing: ContestTiming::Primary {
                start: start.to_string(),
                duration: ContestDuration::Seconds(duration_seconds),
            },
        }
    }

    fn bonus() -> ContestRecord {
        ContestRecord {
            id: ContestId::Number(701234),
            host: "vjudge.net".to_string(),
            event: "Solo Speed Contest #12".to_string(),
            href: Some("https://vjudge.net/contest/701234".to_string()),
            timing: ContestTiming::Secondary {
                start_display: "05.03 Tue 15:00".to_string(),
                duration_hours: 2,
                start_ms: 1_709_650_800_000,
                unix_time: 1_709_650_800_000,
            },
        }
    }

    fn render(contest: &ContestRecord) -> Result<String, AppError> {
        let mut out = Vec::new();
        presenter().render_announcement(&mut out, contest)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_primary_announcement() {
        let text = render(&primary("2024-01-01T10:00:00", 5400)).unwrap();
        assert_eq!(
            text,
            "Assalamu alaikum everyone.\n\nContest reminder for Codeforces Round 1000\n\
             Starts at: 04:00 PM 01-Jan\nDuration: 1 hours 30 minutes\n\
             Link: https://codeforces.com/contests/2063\n"
        );
    }

    #[test]
    fn test_secondary_announcement_uses_display_start() {
        let text = render(&bonus()).unwrap();
        assert!(text.contains("Starts at: 05.03 Tue 15:00\n"));
        assert!(text.contains("Duration: 2 hours 0 minutes\n"));
    }

    #[test]
    fn test_bad_timestamp_writes_nothing() {
        let mut out = Vec::new();
        let result = presenter().render_announcement(&mut out, &primary("06.04 Sun 18:00", 6000));
        assert!(matches!(result, Err(AppError::DateTimeParse(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_text_duration_is_a_format_error() {
        let mut contest = primary("2024-01-01T10:00:00", 0);
        contest.timing = ContestTiming::Primary {
            start: "2024-01-01T10:00:00".to_string(),
            duration: ContestDuration::Text("01:30".to_string()),
        };

        let mut out = Vec::new();
        let result = presenter().render_announcement(&mut out, &contest);
        assert!(matches!(result, Err(AppError::DateTimeParse(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_both_templates_share_greeting_line() {
        let mut details = Vec::new();
        presenter()
            .render_announcement(&mut details, &primary("2024-01-01T10:00:00", 5400))
            .unwrap();
        let mut fallback = Vec::new();
        presenter()
            .render_secondary_announcement(&mut fallback, &bonus())
            .unwrap();

        for out in [details, fallback] {
            let text = String::from_utf8(out).unwrap();
            let first_line = text.split('\n').next().unwrap();
            assert_eq!(first_line, "Assalamu alaikum everyone.");
            assert!(text.starts_with("Assalamu alaikum everyone.\n\nContest reminder for "));
        }
    }

    #[test]
    fn test_missing_link_is_blank() {
        let mut contest = primary("2024-01-01T10:00:00", 7200);
        contest.href = None;
        let text = render(&contest).unwrap();
        assert!(text.ends_with("Link: \n"));
    }

    #[test]
    fn test_fallback_announcement() {
        let mut out = Vec::new();
        presenter()
            .render_secondary_announcement(&mut out, &bonus())
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Assalamu alaikum everyone.\n\n"));
        assert!(text.contains("Starts at: 03:00 PM 05-Mar\n"));
        assert!(text.contains("Duration: 1 hours 0 minutes\n"));
        assert!(text.contains("Link: https://vjudge.net/contest/701234\n"));
    }

    #[test]
    fn test_fallback_rejects_primary_record() {
        let mut out = Vec::new();
        let result =
            presenter().render_secondary_announcement(&mut out, &primary("2024-01-01T10:00:00", 60));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_greeting() {
        let announcement = Announcement::for_contest(&primary("2024-01-01T10:00:00", 3600), 0).unwrap();
        let text = announcement.to_text("Hello team!");
        assert!(text.starts_with("Hello team!\n\nContest reminder for"));
        assert!(text.contains("Starts at: 10:00 AM 01-Jan\n"));
    }
}

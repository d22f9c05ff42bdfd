use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time, UtcOffset};

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// Always emits a numeric offset, never a bare `Z`; the backend expects a
// complete ISO-8601 timestamp.
const TIMESTAMP: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("not a valid calendar date: {input:?}")]
    Parse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("could not format timestamp")]
    Format(#[from] time::error::Format),
}

/// Converts a date-only `YYYY-MM-DD` string into a complete ISO-8601
/// timestamp pinned at midnight local time, e.g. `2024-03-01T00:00:00+01:00`.
///
/// Pinning midnight in the *local* offset keeps the date component identical
/// to the input; converting to UTC here could shift the calendar day.
///
/// Callers are expected to gate out empty or malformed input (the date
/// widgets only produce well-formed dates), so an `Err` indicates a broken
/// precondition rather than a user mistake.
pub fn normalize(date_only: &str) -> Result<String, DateParseError> {
    let date = Date::parse(date_only, DATE_ONLY).map_err(|source| {
        tracing::error!(input = date_only, "date widget produced an unparseable date");
        DateParseError::Parse {
            input: date_only.to_string(),
            source,
        }
    })?;

    // Indeterminate local offset (e.g. sandboxed environments) degrades to
    // +00:00, which is still a numeric offset.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let stamp = PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_offset(offset);
    Ok(stamp.format(TIMESTAMP)?)
}

//! Epoch-seconds <-> ISO-8601 conversions for Date fields.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Basic ISO-8601 form used in gamelists, e.g. `19960623T000000`. Always UTC.
pub const DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// `00010101T000000`, the earliest timestamp [`DATE_FORMAT`] can express.
pub const MIN_EPOCH: i64 = -62_135_596_800;
/// `99991231T235959`, the latest timestamp [`DATE_FORMAT`] can express.
pub const MAX_EPOCH: i64 = 253_402_300_799;

/// Whether `epoch` survives [`format_date`] / [`parse_date`].
pub fn is_valid_epoch(epoch: i64) -> bool {
    (MIN_EPOCH..=MAX_EPOCH).contains(&epoch)
}

/// Parse a gamelist timestamp into epoch seconds.
///
/// The basic form is what gamelists contain; extended RFC 3339 timestamps
/// (`1996-06-23T00:00:00Z`) are accepted as well since hand-edited files
/// often use them. Results outside years 1 to 9999 are rejected.
pub fn parse_date(value: &str) -> Option<i64> {
    let epoch = match NaiveDateTime::parse_from_str(value, DATE_FORMAT) {
        Ok(naive) => naive.and_utc().timestamp(),
        Err(_) => DateTime::parse_from_rfc3339(value).ok()?.timestamp(),
    };
    is_valid_epoch(epoch).then_some(epoch)
}

/// Format epoch seconds in the basic ISO-8601 form, UTC.
///
/// `None` outside [`MIN_EPOCH`]..=[`MAX_EPOCH`].
pub fn format_date(epoch: i64) -> Option<String> {
    if !is_valid_epoch(epoch) {
        return None;
    }
    to_datetime(epoch).map(|dt| dt.format(DATE_FORMAT).to_string())
}

/// Epoch seconds as a UTC timestamp, `None` when out of chrono's range.
pub fn to_datetime(epoch: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(epoch, 0)
}

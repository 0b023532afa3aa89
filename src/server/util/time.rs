//! Timestamp coercion and transport conversion.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::server::error::validate::{ValidationError, ValidationReason};

/// A timestamp argument that is either already parsed or raw text
/// from a client.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampInput {
    Value(NaiveDateTime),
    Text(String),
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Coerce a timestamp input into a canonical [`NaiveDateTime`].
///
/// An already-parsed value passes through unchanged. Text is trimmed
/// and must match `YYYY-MM-DD HH:MM:SS` with an optional fractional
/// second suffix of up to six digits. A shape mismatch fails with
/// `InvalidFormat`; digits that do not form a real calendar date or
/// time (month 13, Feb 30, hour 25) fail with `OutOfRange`.
pub fn validate_timestamp(
    field: &'static str,
    input: TimestampInput,
) -> Result<NaiveDateTime, ValidationError> {
    let text = match input {
        TimestampInput::Value(value) => return Ok(value),
        TimestampInput::Text(text) => text,
    };
    let text = text.trim();

    let invalid = || ValidationError::new(field, ValidationReason::InvalidFormat);
    let out_of_range = || ValidationError::new(field, ValidationReason::OutOfRange);

    let (date_text, time_text) = text.split_once(' ').ok_or_else(invalid)?;

    let [year, month, day] = split_digits(date_text, '-', [4, 2, 2]).ok_or_else(invalid)?;

    let (hms_text, frac_text) = match time_text.split_once('.') {
        Some((hms, frac)) => (hms, Some(frac)),
        None => (time_text, None),
    };
    let [hour, minute, second] = split_digits(hms_text, ':', [2, 2, 2]).ok_or_else(invalid)?;

    let micros = match frac_text {
        None => 0,
        Some(frac) => {
            if frac.is_empty() || frac.len() > 6 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            // right-pad to microsecond precision
            frac.parse::<u32>().map_err(|_| invalid())? * 10u32.pow(6 - frac.len() as u32)
        }
    };

    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(out_of_range)?;
    let time =
        NaiveTime::from_hms_micro_opt(hour, minute, second, micros).ok_or_else(out_of_range)?;

    Ok(date.and_time(time))
}

/// Milliseconds since the Unix epoch, the transport form of a
/// timestamp. Stored timestamps are UTC.
pub fn epoch_millis(timestamp: NaiveDateTime) -> i64 {
    timestamp.and_utc().timestamp_millis()
}

/// Splits `text` on `sep` into exactly three all-digit fields of the
/// given widths; None when the shape does not match.
fn split_digits(text: &str, sep: char, widths: [usize; 3]) -> Option<[u32; 3]> {
    let mut parts = text.split(sep);
    let mut fields = [0u32; 3];

    for (slot, width) in fields.iter_mut().zip(widths) {
        let part = parts.next()?;
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(fields)
}

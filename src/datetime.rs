use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AppError;

fn numeric_parts<'a>(
    raw: &'a str,
    sep: char,
    expected: usize,
    what: &str,
) -> Result<Vec<u32>, AppError> {
    let parts: Vec<&'a str> = raw.split(sep).collect();
    if parts.len() != expected {
        return Err(AppError::MalformedRecord(format!(
            "{} {:?}: expected {} parts separated by '{}'",
            what, raw, expected, sep
        )));
    }

    parts
        .iter()
        .map(|part| {
            part.trim().parse::<u32>().map_err(|_| {
                let reason = format!("{} {:?}: non-numeric part {:?}", what, raw, part);
                AppError::MalformedRecord(reason)
            })
        })
        .collect()
}

/// Parses a `YYYY/MM/DD` class date. Month and day are 1-based.
pub fn parse_class_date(raw: &str) -> Result<NaiveDate, AppError> {
    let parts = numeric_parts(raw, '/', 3, "class date")?;
    let year = i32::try_from(parts[0]).map_err(|_| {
        AppError::MalformedRecord(format!("class date {:?}: year out of range", raw))
    })?;
    NaiveDate::from_ymd_opt(year, parts[1], parts[2])
        .ok_or_else(|| AppError::MalformedRecord(format!("class date {:?}: no such day", raw)))
}

/// Parses an `HH:MM` (or unpadded `H:MM`) 24-hour time.
pub fn parse_time_of_course(raw: &str) -> Result<NaiveTime, AppError> {
    let parts = numeric_parts(raw, ':', 2, "time of course")?;
    NaiveTime::from_hms_opt(parts[0], parts[1], 0)
        .ok_or_else(|| AppError::MalformedRecord(format!("time of course {:?}: out of range", raw)))
}

/// Zero-padded `HH:MM` form, safe for lexicographic comparison.
pub fn canonical_time(raw: &str) -> Result<String, AppError> {
    parse_time_of_course(raw).map(|time| time.format("%H:%M").to_string())
}

/// Local wall-clock start of a class: its date at its course's time.
pub fn class_starts_at(class_date: &str, time_of_course: &str) -> Result<NaiveDateTime, AppError> {
    let date = parse_class_date(class_date)?;
    let time = parse_time_of_course(time_of_course)?;
    Ok(date.and_time(time))
}

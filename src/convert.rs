//! Conversion between Bikram-Sambat and Gregorian dates.
//!
//! Both directions count days from the table epoch (BS 2000/01/01), so the
//! conversion is exactly as accurate as the month-length table.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::convert::TryFrom;

use crate::date::Date;
use crate::error::{Error, ErrorKind, Result};
use crate::table::{self, EPOCH_GREGORIAN, MIN_YEAR};

fn epoch() -> Result<NaiveDate> {
    let (year, month, day) = EPOCH_GREGORIAN;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidDate,
            &format!("{}-{}-{} is not a Gregorian date", year, month, day),
        )
    })
}

/// Days elapsed between BS 2000/01/01 and `date`.
pub fn days_since_epoch(date: &Date) -> Result<u32> {
    let mut days = 0;

    for year in MIN_YEAR..date.year() {
        days += table::days_in_year(year)?;
    }

    let lengths = table::month_lengths(date.year())?;
    days += lengths[..(date.month() - 1) as usize]
        .iter()
        .map(|&d| d as u32)
        .sum::<u32>();

    Ok(days + date.day() - 1)
}

pub fn to_gregorian(date: &Date) -> Result<NaiveDate> {
    let days = days_since_epoch(date)?;

    epoch()?
        .checked_add_signed(Duration::days(days as i64))
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidDate,
                &format!("{} has no Gregorian counterpart", date),
            )
        })
}

pub fn from_gregorian(date: NaiveDate) -> Result<Date> {
    let days = date.signed_duration_since(epoch()?).num_days();

    if days < 0 {
        return Err(Error::unsupported_year(MIN_YEAR - 1)
            .with_msg(&format!("{} lies before the start of the table", date)));
    }

    let days = u32::try_from(days).map_err(|_| {
        Error::from(ErrorKind::UnsupportedYear)
            .with_msg(&format!("{} lies past the end of the table", date))
    })?;

    Date::from_ymd(MIN_YEAR, 1, 1)?.add_days(days)
}

/// The current local day as a BS date.
pub fn today() -> Result<Date> {
    from_gregorian(Local::now().date_naive())
}

pub fn weekday(date: &Date) -> Result<Weekday> {
    Ok(to_gregorian(date)?.weekday())
}

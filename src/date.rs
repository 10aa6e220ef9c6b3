use chrono::{NaiveDate, Weekday};
use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    sequence::{delimited, preceded, tuple},
    IResult,
};
use std::fmt;
use std::str::FromStr;

use crate::convert;
use crate::error::{Error, ErrorKind, Result};
use crate::lang::Language;
use crate::table;

/// A single, valid day of the Bikram-Sambat calendar.
///
/// A `Date` can only be obtained through validating constructors, so the
/// day always lies within the month length the table lists for its year.
/// Shifting never mutates, it returns a new value with year, month and day
/// recomputed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
    month_days: u32,
}

impl Date {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let month_days = table::days_in_month(year, month)?;

        if day < 1 || day > month_days {
            return Err(Error::new(
                ErrorKind::InvalidDate,
                &format!(
                    "day {} is not within 1..={} of {}/{}",
                    day, month_days, year, month
                ),
            ));
        }

        Ok(Date {
            year,
            month,
            day,
            month_days,
        })
    }

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
        convert::from_gregorian(date)
    }

    pub fn today() -> Result<Self> {
        convert::today()
    }

    fn parse_number<T: FromStr>(input: &str) -> IResult<&str, T> {
        map_res(digit1, |s: &str| s.parse::<T>())(input)
    }

    fn parse_ymd(input: &str) -> IResult<&str, (i32, u32, u32)> {
        all_consuming(delimited(
            space0,
            tuple((
                Self::parse_number::<i32>,
                preceded(char('/'), Self::parse_number::<u32>),
                preceded(char('/'), Self::parse_number::<u32>),
            )),
            space0,
        ))(input)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Length of this date's month according to the table.
    pub fn days_in_month(&self) -> u32 {
        self.month_days
    }

    pub fn first_of_month(&self) -> Self {
        Date { day: 1, ..*self }
    }

    pub fn last_of_month(&self) -> Self {
        Date {
            day: self.month_days,
            ..*self
        }
    }

    pub fn add_days(&self, n: u32) -> Result<Self> {
        let (mut year, mut month) = (self.year, self.month);
        let mut day = self.day as u64 + n as u64;

        loop {
            let month_days = table::days_in_month(year, month)? as u64;
            if day <= month_days {
                break;
            }

            day -= month_days;
            if month == 12 {
                month = 1;
                year += 1;
            } else {
                month += 1;
            }
        }

        Date::from_ymd(year, month, day as u32)
    }

    pub fn sub_days(&self, n: u32) -> Result<Self> {
        let (mut year, mut month) = (self.year, self.month);
        let mut day = self.day as i64 - n as i64;

        while day < 1 {
            if month == 1 {
                month = 12;
                year -= 1;
            } else {
                month -= 1;
            }

            day += table::days_in_month(year, month)? as i64;
        }

        Date::from_ymd(year, month, day as u32)
    }

    /// Shifts by a signed number of days.
    pub fn shift(&self, delta: i32) -> Result<Self> {
        if delta >= 0 {
            self.add_days(delta as u32)
        } else {
            self.sub_days(delta.unsigned_abs())
        }
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        convert::to_gregorian(self)
    }

    pub fn weekday(&self) -> Result<Weekday> {
        convert::weekday(self)
    }

    /// Canonical `Y/M/D` rendering.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// `Y/M/D` rendered with the digits of `lang`.
    pub fn format_with(&self, lang: &dyn Language) -> String {
        format!(
            "{}/{}/{}",
            lang.render_number(self.year as u32),
            lang.render_number(self.month),
            lang.render_number(self.day)
        )
    }

    /// Long form, e.g. `10 Bhadra 2081`.
    pub fn format_long(&self, lang: &dyn Language) -> String {
        format!(
            "{} {} {}",
            lang.render_number(self.day),
            lang.month_name(self.month).unwrap_or_default(),
            lang.render_number(self.year as u32)
        )
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (year, month, day)) = Self::parse_ymd(s)
            .map_err(|err| Error::from(err).with_msg(&format!("'{}' is not of the form Y/M/D", s)))?;

        Date::from_ymd(year, month, day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{English, Nepali};

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn parse_slash_separated() {
        let d: Date = "2081/5/10".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2081, 5, 10));

        let padded = Date::parse(" 2081/05/09 ").unwrap();
        assert_eq!(padded, date(2081, 5, 9));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in &["", "2081", "2081/5", "2081-5-10", "2081/5/10/1", "a/b/c", "2081/5/x"] {
            let err = Date::parse(input).unwrap_err();
            assert!(err.is_invalid_date_format(), "{}: {}", input, err);
        }
    }

    #[test]
    fn parse_rejects_out_of_range_days() {
        // 2081/2 has 32 days, 2081/3 has 31
        assert!(Date::parse("2081/2/32").is_ok());
        assert!(Date::parse("2081/3/32").unwrap_err().is_invalid_date());
        assert!(Date::parse("2081/3/0").unwrap_err().is_invalid_date());
        assert!(Date::parse("2081/13/1").unwrap_err().is_invalid_date());
        assert!(Date::parse("2081/0/1").unwrap_err().is_invalid_date());
    }

    #[test]
    fn unsupported_year() {
        assert!(Date::parse("1999/1/1").unwrap_err().is_unsupported_year());
        assert!(Date::from_ymd(2091, 1, 1).unwrap_err().is_unsupported_year());
    }

    #[test]
    fn add_zero_is_noop() {
        let d = date(2081, 5, 10);
        assert_eq!(d.add_days(0).unwrap(), d);
        assert_eq!(d.sub_days(0).unwrap(), d);
    }

    #[test]
    fn crosses_month_boundary() {
        let l1 = table::days_in_month(2081, 1).unwrap();
        assert_eq!(date(2081, 1, l1).add_days(1).unwrap(), date(2081, 2, 1));
        assert_eq!(date(2081, 2, 1).sub_days(1).unwrap(), date(2081, 1, l1));
    }

    #[test]
    fn crosses_year_boundary() {
        let l12 = table::days_in_month(2080, 12).unwrap();
        assert_eq!(date(2080, 12, l12).add_days(1).unwrap(), date(2081, 1, 1));
        assert_eq!(date(2081, 1, 1).sub_days(1).unwrap(), date(2080, 12, l12));
    }

    #[test]
    fn spans_several_years() {
        let start = date(2070, 1, 17);
        let days: u32 = (2070..2075).map(|y| table::days_in_year(y).unwrap()).sum();
        assert_eq!(start.add_days(days).unwrap(), date(2075, 1, 17));
        assert_eq!(date(2075, 1, 17).sub_days(days).unwrap(), start);
    }

    #[test]
    fn add_and_sub_are_inverse() {
        let samples = [date(2000, 1, 1), date(2045, 6, 30), date(2081, 2, 32), date(2089, 12, 30)];
        for d in samples.iter() {
            for &n in &[1u32, 29, 31, 32, 100, 365, 1000] {
                if let Ok(shifted) = d.add_days(n) {
                    assert_eq!(shifted.sub_days(n).unwrap(), *d, "{} + {}", d, n);
                }
                if let Ok(shifted) = d.sub_days(n) {
                    assert_eq!(shifted.add_days(n).unwrap(), *d, "{} - {}", d, n);
                }
            }
        }
    }

    #[test]
    fn walk_off_the_table() {
        assert!(date(2090, 12, 1).add_days(400).unwrap_err().is_unsupported_year());
        assert!(date(2000, 1, 1).sub_days(1).unwrap_err().is_unsupported_year());
    }

    #[test]
    fn signed_shift() {
        let d = date(2081, 5, 10);
        assert_eq!(d.shift(5).unwrap(), date(2081, 5, 15));
        assert_eq!(d.shift(-10).unwrap(), d.sub_days(10).unwrap());
    }

    #[test]
    fn month_edges() {
        let d = date(2081, 2, 17);
        assert_eq!(d.days_in_month(), 32);
        assert_eq!(d.first_of_month(), date(2081, 2, 1));
        assert_eq!(d.last_of_month(), date(2081, 2, 32));
    }

    #[test]
    fn ordering_follows_calendar() {
        assert!(date(2081, 1, 31) < date(2081, 2, 1));
        assert!(date(2080, 12, 30) < date(2081, 1, 1));
    }

    #[test]
    fn formatting() {
        let d = date(2081, 5, 10);
        assert_eq!(d.format(), "2081/5/10");
        assert_eq!(d.format_with(&English), "2081/5/10");
        assert_eq!(d.format_with(&Nepali), "२०८१/५/१०");
        assert_eq!(d.format_long(&English), "10 Bhadra 2081");
    }
}

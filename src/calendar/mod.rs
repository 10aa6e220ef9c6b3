use std::collections::BTreeMap;
use std::fmt;

use crate::date::Date;
use crate::error::{Error, ErrorKind, Result};
use crate::lang::{Language, Nepali};
use crate::table;

mod event;
mod navigation;

pub use event::{DayKey, Event};

/// One day of the displayed month, optionally annotated with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: Date,
    event: Option<Event>,
}

impl Day {
    pub fn new(date: Date) -> Self {
        Day { date, event: None }
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn day_num(&self) -> u32 {
        self.date.day()
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }

    pub fn set_event(&mut self, event: Event) -> &mut Self {
        self.event = Some(event);
        self
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.day())
    }
}

/// What a calendar should be centered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Today,
    Text(String),
    Date(Date),
}

impl DateInput {
    fn resolve(self) -> Result<Date> {
        match self {
            DateInput::Today => Date::today(),
            DateInput::Text(s) => s.parse(),
            DateInput::Date(date) => Ok(date),
        }
    }
}

impl From<Date> for DateInput {
    fn from(date: Date) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(date: Option<T>) -> Self {
        date.map_or(DateInput::Today, Into::into)
    }
}

pub type Days = BTreeMap<u32, Day>;

/// A Bikram-Sambat month built around a current date.
///
/// Every change of the current date rebuilds the whole month: the scalar
/// fields, the month length and the day map are computed first and only
/// swapped in once all of them succeeded. Events attached to days do not
/// survive such a rebuild.
#[derive(Debug)]
pub struct Calendar {
    current: Date,
    today: Option<Date>,
    year: i32,
    month: u32,
    day: u32,
    month_days: u32,
    days: Days,
    language: Box<dyn Language>,
}

impl Calendar {
    pub fn new<D: Into<DateInput>>(date: D) -> Result<Self> {
        let input = date.into();
        let explicit = input != DateInput::Today;

        let current = input.resolve()?;
        let (month_days, days) = Self::build_month(&current)?;

        let today = if explicit {
            Date::today()
                .map_err(|err| log::debug!("today is not representable: {}", err))
                .ok()
        } else {
            Some(current)
        };

        Ok(Calendar {
            current,
            today,
            year: current.year(),
            month: current.month(),
            day: current.day(),
            month_days,
            days,
            language: Box::new(Nepali),
        })
    }

    pub fn today() -> Result<Self> {
        Self::new(DateInput::Today)
    }

    fn build_month(current: &Date) -> Result<(u32, Days)> {
        let (year, month) = (current.year(), current.month());
        let month_days = table::days_in_month(year, month)?;

        let days = (1..=month_days)
            .map(|d| Date::from_ymd(year, month, d).map(|date| (d, Day::new(date))))
            .collect::<Result<Days>>()?;

        Ok((month_days, days))
    }

    fn set_up(&mut self, input: DateInput) -> Result<()> {
        let current = input.resolve()?;
        let (month_days, days) = Self::build_month(&current)?;

        log::debug!(
            "calendar moved from {} to {} ({} days)",
            self.current,
            current,
            month_days
        );

        self.current = current;
        self.year = current.year();
        self.month = current.month();
        self.day = current.day();
        self.month_days = month_days;
        self.days = days;

        Ok(())
    }

    /// Re-centers the calendar on `date`, discarding all events.
    ///
    /// On error the calendar is left exactly as it was.
    pub fn set_current<D: Into<DateInput>>(&mut self, date: D) -> Result<&mut Self> {
        self.set_up(date.into())?;
        Ok(self)
    }

    pub fn current(&self) -> &Date {
        &self.current
    }

    /// The real-world day at construction, if the table covers it.
    pub fn today_date(&self) -> Option<&Date> {
        self.today.as_ref()
    }

    pub fn is_today(&self, day: &Day) -> bool {
        self.today.as_ref() == Some(day.date())
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

    /// Length of the current month.
    pub fn month_days(&self) -> u32 {
        self.month_days
    }

    pub fn days(&self) -> &Days {
        &self.days
    }

    /// Read-only projection of the day map.
    pub fn map_days<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Days) -> R,
    {
        f(&self.days)
    }

    pub fn day_entry(&self, day: u32) -> Option<&Day> {
        self.days.get(&day)
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    pub fn set_language(&mut self, language: Box<dyn Language>) -> &mut Self {
        self.language = language;
        self
    }

    pub fn month_name(&self) -> &'static str {
        self.language.month_name(self.month).unwrap_or_default()
    }

    /// The month laid out in Sunday-first weeks, padded with `None`.
    pub fn weeks(&self) -> Result<Vec<Vec<Option<&Day>>>> {
        let first = self.days.get(&1).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidDate,
                &format!("{}/{} has no first day", self.year, self.month),
            )
        })?;
        let offset = first.date().weekday()?.num_days_from_sunday() as usize;

        let mut cells: Vec<Option<&Day>> = std::iter::repeat(None)
            .take(offset)
            .chain(self.days.values().map(Some))
            .collect();
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Ok(cells.chunks(7).map(<[_]>::to_vec).collect())
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current.format_with(self.language.as_ref()))
    }
}

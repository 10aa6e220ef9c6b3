use itertools::Itertools;
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;

use super::Calendar;
use crate::date::Date;
use crate::error::{Error, ErrorKind, Result};

/// Payload attached to a day: a single note or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Event {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for Event {
    fn from(s: &str) -> Self {
        Event::Text(s.to_owned())
    }
}

impl From<String> for Event {
    fn from(s: String) -> Self {
        Event::Text(s)
    }
}

impl From<Vec<String>> for Event {
    fn from(list: Vec<String>) -> Self {
        Event::List(list)
    }
}

impl From<Vec<&str>> for Event {
    fn from(list: Vec<&str>) -> Self {
        Event::List(list.into_iter().map(str::to_owned).collect())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Text(text) => write!(f, "{}", text),
            Event::List(list) => write!(f, "{}", list.iter().join(", ")),
        }
    }
}

/// Addresses a day of the displayed month.
///
/// Numeric strings count as day numbers, anything else is parsed as a
/// `Y/M/D` date of which only the day is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKey {
    Day(i64),
    Date(String),
}

impl From<u32> for DayKey {
    fn from(day: u32) -> Self {
        DayKey::Day(day as i64)
    }
}

impl From<i32> for DayKey {
    fn from(day: i32) -> Self {
        DayKey::Day(day as i64)
    }
}

impl From<&str> for DayKey {
    fn from(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(day) => DayKey::Day(day),
            Err(_) => DayKey::Date(s.to_owned()),
        }
    }
}

impl From<String> for DayKey {
    fn from(s: String) -> Self {
        DayKey::from(s.as_str())
    }
}

impl From<&String> for DayKey {
    fn from(s: &String) -> Self {
        DayKey::from(s.as_str())
    }
}

impl From<Date> for DayKey {
    fn from(date: Date) -> Self {
        DayKey::Date(date.to_string())
    }
}

impl Calendar {
    fn resolve_day_key(&self, key: DayKey) -> Result<u32> {
        let day = match key {
            DayKey::Day(day) => day,
            DayKey::Date(s) => {
                let date: Date = s.parse()?;
                if (date.year(), date.month()) != (self.year, self.month) {
                    log::warn!(
                        "event date {} lies outside {}/{}, using its day of month",
                        date,
                        self.year,
                        self.month
                    );
                }
                date.day() as i64
            }
        };

        match u32::try_from(day) {
            Ok(day) if self.days.contains_key(&day) => Ok(day),
            _ => Err(Error::new(
                ErrorKind::InvalidDate,
                &format!(
                    "day {} is not within 1..={} of {}/{}",
                    day, self.month_days, self.year, self.month
                ),
            )),
        }
    }

    /// Attaches `event` to a day of the current month, replacing any
    /// previous event of that day.
    pub fn set_event<K, E>(&mut self, key: K, event: E) -> Result<&mut Self>
    where
        K: Into<DayKey>,
        E: Into<Event>,
    {
        let day = self.resolve_day_key(key.into())?;

        if let Some(entry) = self.days.get_mut(&day) {
            entry.set_event(event.into());
        }

        Ok(self)
    }

    /// Attaches all `events`; nothing is attached if any key is invalid.
    pub fn set_events<I, K, E>(&mut self, events: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<DayKey>,
        E: Into<Event>,
    {
        let resolved = events
            .into_iter()
            .map(|(key, event)| -> Result<(u32, Event)> {
                Ok((self.resolve_day_key(key.into())?, event.into()))
            })
            .collect::<Result<Vec<(u32, Event)>>>()?;

        for (day, event) in resolved {
            if let Some(entry) = self.days.get_mut(&day) {
                entry.set_event(event);
            }
        }

        Ok(self)
    }

    /// Hands the calendar to `populate`, e.g. to load events from a store.
    pub fn set_events_with<F>(&mut self, populate: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Calendar) -> Result<()>,
    {
        populate(self)?;
        Ok(self)
    }

    pub fn event(&self, day: u32) -> Option<&Event> {
        self.days.get(&day).and_then(|d| d.event())
    }

    pub fn events(&self) -> impl Iterator<Item = (u32, &Event)> + '_ {
        self.days
            .iter()
            .filter_map(|(&day, entry)| entry.event().map(|event| (day, event)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn calendar() -> Calendar {
        Calendar::new("2081/5/1").unwrap()
    }

    #[test]
    fn numeric_key_marks_single_day() {
        let mut cal = calendar();
        cal.set_event(15, "Holiday").unwrap();

        assert_eq!(cal.event(15), Some(&Event::Text("Holiday".to_owned())));
        assert_eq!(cal.events().count(), 1);
        assert!(cal
            .days()
            .iter()
            .filter(|(&n, _)| n != 15)
            .all(|(_, d)| d.event().is_none()));
    }

    #[test]
    fn date_key_resolves_to_day_of_month() {
        let mut by_date = calendar();
        by_date.set_event("2081/5/10", "Teej").unwrap();

        let mut by_day = calendar();
        by_day.set_event(10, "Teej").unwrap();

        assert_eq!(by_date.days(), by_day.days());
    }

    #[test]
    fn numeric_string_key_is_a_day() {
        assert_eq!(DayKey::from("7"), DayKey::Day(7));
        assert_eq!(DayKey::from("2081/5/7"), DayKey::Date("2081/5/7".to_owned()));

        let mut cal = calendar();
        cal.set_event("7", "Saptami").unwrap();
        assert!(cal.event(7).is_some());
    }

    #[test]
    fn out_of_range_day_is_rejected() {
        let mut cal = calendar();

        assert!(cal.set_event(0, "none").unwrap_err().is_invalid_date());
        assert!(cal.set_event(32, "none").unwrap_err().is_invalid_date());
        assert!(cal.set_event(-3, "none").unwrap_err().is_invalid_date());
        assert_eq!(cal.days().len(), 31);
        assert_eq!(cal.events().count(), 0);
    }

    #[test]
    fn malformed_date_key_is_a_format_error() {
        let mut cal = calendar();
        let err = cal.set_event("5th of Bhadra", "x").unwrap_err();
        assert!(err.is_invalid_date_format());
    }

    #[test]
    fn later_event_replaces_earlier() {
        let mut cal = calendar();
        cal.set_event(3, "first").unwrap().set_event(3, "second").unwrap();
        assert_eq!(cal.event(3), Some(&Event::from("second")));
    }

    #[test]
    fn list_payload() {
        let mut cal = calendar();
        cal.set_event(4, vec!["Puja", "Fair"]).unwrap();

        let event = cal.event(4).unwrap();
        assert_eq!(event, &Event::List(vec!["Puja".to_owned(), "Fair".to_owned()]));
        assert_eq!(event.to_string(), "Puja, Fair");
    }

    #[test]
    fn set_events_from_map() {
        let mut events = BTreeMap::new();
        events.insert("1", "New month");
        events.insert("2081/5/20", "Twentieth");

        let mut cal = calendar();
        cal.set_events(events).unwrap();

        assert_eq!(cal.event(1), Some(&Event::from("New month")));
        assert_eq!(cal.event(20), Some(&Event::from("Twentieth")));
        assert_eq!(cal.events().count(), 2);
    }

    #[test]
    fn set_events_is_all_or_nothing() {
        let mut cal = calendar();
        let result = cal.set_events(vec![(1u32, "ok"), (40, "bad")]);

        assert!(result.is_err());
        assert_eq!(cal.events().count(), 0);
    }

    #[test]
    fn set_events_with_callback() {
        let mut cal = calendar();
        cal.set_events_with(|cal| {
            let last = cal.month_days();
            cal.set_event(last, "Month end")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(cal.event(31), Some(&Event::from("Month end")));
    }

    #[test]
    fn deserializes_text_and_list() {
        let text: Event = toml::from_str::<BTreeMap<String, Event>>("a = \"one\"")
            .unwrap()
            .remove("a")
            .unwrap();
        assert_eq!(text, Event::from("one"));

        let list: Event = toml::from_str::<BTreeMap<String, Event>>("a = [\"one\", \"two\"]")
            .unwrap()
            .remove("a")
            .unwrap();
        assert_eq!(list, Event::from(vec!["one", "two"]));
    }
}

use chrono::Weekday;
use std::fmt;

use crate::error::{Error, ErrorKind, Result};

/// Localized rendering of numbers and calendar names.
pub trait Language: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn digits(&self) -> [char; 10];

    /// Name of BS month `month` (1-based).
    fn month_name(&self, month: u32) -> Option<&'static str>;

    fn weekday_name(&self, weekday: Weekday) -> &'static str;

    fn weekday_short(&self, weekday: Weekday) -> &'static str;

    fn render_number(&self, n: u32) -> String {
        let digits = self.digits();
        n.to_string()
            .chars()
            .map(|c| c.to_digit(10).map_or(c, |d| digits[d as usize]))
            .collect()
    }
}

fn lookup<T: Copy>(names: &[T; 12], month: u32) -> Option<T> {
    month
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .copied()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl English {
    const MONTHS: [&'static str; 12] = [
        "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush",
        "Magh", "Falgun", "Chaitra",
    ];

    const WEEKDAYS: [&'static str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
}

impl Language for English {
    fn name(&self) -> &'static str {
        "english"
    }

    fn digits(&self) -> [char; 10] {
        ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']
    }

    fn month_name(&self, month: u32) -> Option<&'static str> {
        lookup(&Self::MONTHS, month)
    }

    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        Self::WEEKDAYS[weekday.num_days_from_sunday() as usize]
    }

    fn weekday_short(&self, weekday: Weekday) -> &'static str {
        &self.weekday_name(weekday)[..3]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Nepali;

impl Nepali {
    const MONTHS: [&'static str; 12] = [
        "बैशाख", "जेठ", "असार", "श्रावण", "भदौ", "असोज", "कार्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत्र",
    ];

    const WEEKDAYS: [&'static str; 7] = [
        "आइतबार",
        "सोमबार",
        "मङ्गलबार",
        "बुधबार",
        "बिहीबार",
        "शुक्रबार",
        "शनिबार",
    ];

    const WEEKDAYS_SHORT: [&'static str; 7] = ["आइत", "सोम", "मङ्गल", "बुध", "बिही", "शुक्र", "शनि"];
}

impl Language for Nepali {
    fn name(&self) -> &'static str {
        "nepali"
    }

    fn digits(&self) -> [char; 10] {
        ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९']
    }

    fn month_name(&self, month: u32) -> Option<&'static str> {
        lookup(&Self::MONTHS, month)
    }

    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        Self::WEEKDAYS[weekday.num_days_from_sunday() as usize]
    }

    fn weekday_short(&self, weekday: Weekday) -> &'static str {
        Self::WEEKDAYS_SHORT[weekday.num_days_from_sunday() as usize]
    }
}

pub fn language_from_name(name: &str) -> Result<Box<dyn Language>> {
    match name.trim().to_lowercase().as_str() {
        "en" | "english" => Ok(Box::new(English)),
        "ne" | "np" | "nepali" => Ok(Box::new(Nepali)),
        other => Err(Error::new(
            ErrorKind::UnknownLanguage,
            &format!("'{}' (expected 'english' or 'nepali')", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nepali_digits() {
        assert_eq!(Nepali.render_number(2081), "२०८१");
        assert_eq!(Nepali.render_number(0), "०");
        assert_eq!(English.render_number(2081), "2081");
    }

    #[test]
    fn month_names() {
        assert_eq!(English.month_name(1), Some("Baisakh"));
        assert_eq!(English.month_name(12), Some("Chaitra"));
        assert_eq!(Nepali.month_name(5), Some("भदौ"));
        assert_eq!(English.month_name(0), None);
        assert_eq!(Nepali.month_name(13), None);
    }

    #[test]
    fn weekday_names() {
        assert_eq!(English.weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(English.weekday_short(Weekday::Wed), "Wed");
        assert_eq!(Nepali.weekday_name(Weekday::Sat), "शनिबार");
        assert_eq!(Nepali.weekday_short(Weekday::Mon), "सोम");
    }

    #[test]
    fn select_by_name() {
        assert_eq!(language_from_name("en").unwrap().name(), "english");
        assert_eq!(language_from_name(" Nepali ").unwrap().name(), "nepali");
        assert_eq!(language_from_name("np").unwrap().name(), "nepali");

        let err = language_from_name("klingon").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownLanguage));
    }
}

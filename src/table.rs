//! Month lengths of the Bikram-Sambat calendar.
//!
//! Months in BS do not follow a closed-form rule, so every year carries its
//! own list of twelve month lengths. All validation and day arithmetic in the
//! crate goes through this table.

use phf::phf_map;

use crate::error::{Error, ErrorKind, Result};

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2090;

/// Gregorian date of BS 2000/01/01.
pub const EPOCH_GREGORIAN: (i32, u32, u32) = (1943, 4, 14);

static MONTH_LENGTHS: phf::Map<i32, [u8; 12]> = phf_map! {
    2000i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2001i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2002i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2003i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2004i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2005i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2006i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2007i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2008i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    2009i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2010i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2011i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2012i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    2013i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2014i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2015i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2016i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    2017i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2018i32 => [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2019i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2020i32 => [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    2021i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2022i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    2023i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2024i32 => [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    2025i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2026i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2027i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2028i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2029i32 => [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    2030i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2031i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2032i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2033i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2034i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2035i32 => [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    2036i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2037i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2038i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2039i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    2040i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2041i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2042i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2043i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    2044i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2045i32 => [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2046i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2047i32 => [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    2048i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2049i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    2050i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2051i32 => [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    2052i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2053i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    2054i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2055i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2056i32 => [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    2057i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2058i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2059i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2060i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2061i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2062i32 => [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31],
    2063i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2064i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2065i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2066i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    2067i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2068i32 => [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2069i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2070i32 => [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    2071i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2072i32 => [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    2073i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    2074i32 => [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    2075i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2076i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    2077i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2078i32 => [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    2079i32 => [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    2080i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    2081i32 => [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    2082i32 => [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    2083i32 => [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    2084i32 => [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    2085i32 => [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30],
    2086i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    2087i32 => [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30],
    2088i32 => [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30],
    2089i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    2090i32 => [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
};

pub fn is_supported(year: i32) -> bool {
    MONTH_LENGTHS.contains_key(&year)
}

pub fn month_lengths(year: i32) -> Result<&'static [u8; 12]> {
    MONTH_LENGTHS
        .get(&year)
        .ok_or_else(|| Error::unsupported_year(year))
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let lengths = month_lengths(year)?;

    if !(1..=12).contains(&month) {
        return Err(Error::new(
            ErrorKind::InvalidDate,
            &format!("month {} is not within 1..=12", month),
        ));
    }

    Ok(lengths[(month - 1) as usize] as u32)
}

pub fn days_in_year(year: i32) -> Result<u32> {
    Ok(month_lengths(year)?.iter().map(|&d| d as u32).sum())
}

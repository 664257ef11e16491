//! Jalali (Solar Hijri) calendar support.
//!
//! Only the Gregorian to Jalali direction is needed: timestamps are captured
//! with `chrono` and rendered in the Persian calendar.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::LocaleError;

/// Cumulative day counts before each Gregorian month in a common year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in a 33-year Jalali leap cycle.
const DAYS_PER_CYCLE: i64 = 12053;

/// Days in a 4-year sub-cycle.
const DAYS_PER_QUAD: i64 = 1461;

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JalaliDate {
    pub year: i32,
    /// 1 (Farvardin) through 12 (Esfand).
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Convert a Gregorian date.
    ///
    /// Supports Gregorian years 1 and later, which covers every date a
    /// storefront session can produce.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, LocaleError> {
        let gy = date.year() as i64;
        if gy < 1 {
            return Err(LocaleError::DateOutOfRange(date.to_string()));
        }
        let gm = date.month() as usize;
        let gd = date.day() as i64;

        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
            + gd
            + GREGORIAN_DAYS_BEFORE_MONTH[gm - 1];

        let mut jy = -1595 + 33 * (days / DAYS_PER_CYCLE);
        days %= DAYS_PER_CYCLE;
        jy += 4 * (days / DAYS_PER_QUAD);
        days %= DAYS_PER_QUAD;
        if days > 365 {
            jy += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Ok(Self {
            year: jy as i32,
            month: month as u32,
            day: day as u32,
        })
    }

    /// Persian month name.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "فروردین",
            2 => "اردیبهشت",
            3 => "خرداد",
            4 => "تیر",
            5 => "مرداد",
            6 => "شهریور",
            7 => "مهر",
            8 => "آبان",
            9 => "آذر",
            10 => "دی",
            11 => "بهمن",
            _ => "اسفند",
        }
    }
}

impl fmt::Display for JalaliDate {
    /// `jYYYY/jMM/jDD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Render a local timestamp as `jYYYY/jMM/jDD HH:mm:ss`.
pub fn format_jalali_datetime(at: &NaiveDateTime) -> Result<String, LocaleError> {
    let date = JalaliDate::from_gregorian(at.date())?;
    Ok(format!("{} {}", date, format_clock(at)))
}

/// Render a local timestamp as `HH:mm:ss jYYYY/jMM/jDD` (the top-bar clock).
pub fn format_jalali_clock(at: &NaiveDateTime) -> Result<String, LocaleError> {
    let date = JalaliDate::from_gregorian(at.date())?;
    Ok(format!("{} {}", format_clock(at), date))
}

fn format_clock(at: &NaiveDateTime) -> String {
    format!("{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jalali(y: i32, m: u32, d: u32) -> JalaliDate {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        JalaliDate::from_gregorian(date).unwrap()
    }

    #[test]
    fn test_nowruz() {
        assert_eq!(jalali(2024, 3, 20), JalaliDate { year: 1403, month: 1, day: 1 });
        assert_eq!(jalali(2021, 3, 21), JalaliDate { year: 1400, month: 1, day: 1 });
    }

    #[test]
    fn test_last_day_of_leap_year() {
        // 1402 ended on Esfand 29; 1403 is a leap year ending on Esfand 30.
        assert_eq!(jalali(2024, 3, 19), JalaliDate { year: 1402, month: 12, day: 29 });
        assert_eq!(jalali(2025, 3, 20), JalaliDate { year: 1403, month: 12, day: 30 });
    }

    #[test]
    fn test_second_half_of_year() {
        // First of Mehr.
        assert_eq!(jalali(2023, 9, 23), JalaliDate { year: 1402, month: 7, day: 1 });
        assert_eq!(jalali(2023, 9, 23).month_name(), "مهر");
    }

    #[test]
    fn test_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(format_jalali_datetime(&at).unwrap(), "1403/01/01 09:05:07");
        assert_eq!(format_jalali_clock(&at).unwrap(), "09:05:07 1403/01/01");
    }
}

//! Date/time format patterns in the `yyyy-MM-dd HH:mm:ss.S` letter style.
//!
//! A pattern is compiled once into a token list and then rendered for each
//! value. Letters follow the usual date-format conventions:
//!
//! | Letter | Field | Notes |
//! |--------|-------|-------|
//! | `G` | era | `AD` / `BC` |
//! | `y` | year | `yy` is the two-digit year |
//! | `Y` | week-based year | year of the `w` week |
//! | `M`, `L` | month | 3 letters: `Jan`, 4+: `January` |
//! | `d` | day of month | |
//! | `D` | day of year | |
//! | `E` | day name | <4 letters: `Mon`, 4+: `Monday` |
//! | `u` | day number | 1 = Monday |
//! | `F` | day of week in month | |
//! | `w`, `W` | week in year / month | Sunday start, week 1 holds the 1st |
//! | `a` | am/pm marker | |
//! | `H`, `k`, `K`, `h` | hour | 0-23, 1-24, 0-11, 1-12 |
//! | `m`, `s` | minute, second | |
//! | `S` | millisecond | count, zero-padded to width |
//! | `z`, `Z`, `X` | zone | values carry no zone and render as UTC |
//!
//! Text inside single quotes is literal; `''` is a single quote. Numeric
//! fields are zero-padded to the letter count. English names only.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt::Write;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Era,
    Year,
    WeekYear,
    Month,
    DayOfMonth,
    DayOfYear,
    DayName,
    DayNumber,
    DayOfWeekInMonth,
    WeekInYear,
    WeekInMonth,
    AmPm,
    Hour0To23,
    Hour1To24,
    Hour0To11,
    Hour1To12,
    Minute,
    Second,
    Millisecond,
    ZoneName,
    ZoneRfc822,
    ZoneIso,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'G' => Field::Era,
            'y' => Field::Year,
            'Y' => Field::WeekYear,
            'M' | 'L' => Field::Month,
            'd' => Field::DayOfMonth,
            'D' => Field::DayOfYear,
            'E' => Field::DayName,
            'u' => Field::DayNumber,
            'F' => Field::DayOfWeekInMonth,
            'w' => Field::WeekInYear,
            'W' => Field::WeekInMonth,
            'a' => Field::AmPm,
            'H' => Field::Hour0To23,
            'k' => Field::Hour1To24,
            'K' => Field::Hour0To11,
            'h' => Field::Hour1To12,
            'm' => Field::Minute,
            's' => Field::Second,
            'S' => Field::Millisecond,
            'z' => Field::ZoneName,
            'Z' => Field::ZoneRfc822,
            'X' => Field::ZoneIso,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field { field: Field, width: usize },
}

/// A compiled date/time format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    /// Compile a pattern.
    ///
    /// # Errors
    /// Returns `Error::InvalidFormatPattern` for an unknown unquoted letter or
    /// an unterminated quote.
    pub fn compile(pattern: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            literal.push('\'');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    literal.push(q);
                }
                if !closed {
                    return Err(Error::invalid_pattern(pattern, "unterminated quote"));
                }
            } else if c.is_ascii_alphabetic() {
                let field = Field::from_letter(c).ok_or_else(|| {
                    Error::invalid_pattern(pattern, format!("illegal pattern character '{}'", c))
                })?;
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field { field, width });
            } else {
                literal.push(c);
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// The source pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a date/time value.
    pub fn format(&self, dt: &NaiveDateTime) -> String {
        let mut out = String::with_capacity(self.pattern.len() + 8);
        for token in &self.tokens {
            match token {
                Token::Literal(s) => out.push_str(s),
                Token::Field { field, width } => write_field(&mut out, *field, *width, dt),
            }
        }
        out
    }
}

fn pad(out: &mut String, value: i64, width: usize) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{:0width$}", value, width = width);
}

/// Week-based year and week number for weeks starting on Sunday, where
/// week 1 is the week containing January 1st.
fn us_week(date: NaiveDate) -> (i32, u32) {
    let year = date.year();
    let days_in_year = NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |d| d.ordinal());
    let to_saturday = 6 - date.weekday().num_days_from_sunday();
    if date.ordinal() + to_saturday > days_in_year {
        return (year + 1, 1);
    }
    let jan1 = date
        .with_ordinal(1)
        .map_or(0, |d| d.weekday().num_days_from_sunday());
    (year, (date.ordinal() - 1 + jan1) / 7 + 1)
}

fn write_field(out: &mut String, field: Field, width: usize, dt: &NaiveDateTime) {
    let hour = dt.hour() as i64;
    match field {
        Field::Era => out.push_str(if dt.year() > 0 { "AD" } else { "BC" }),
        Field::Year => {
            let (_, year) = dt.year_ce();
            if width == 2 {
                pad(out, (year % 100) as i64, 2);
            } else {
                pad(out, year as i64, width);
            }
        }
        Field::WeekYear => {
            let year = us_week(dt.date()).0 as i64;
            if width == 2 {
                pad(out, year.rem_euclid(100), 2);
            } else {
                pad(out, year, width);
            }
        }
        Field::Month => match width {
            1 | 2 => pad(out, dt.month() as i64, width),
            3 => out.push_str(&dt.format("%b").to_string()),
            _ => out.push_str(&dt.format("%B").to_string()),
        },
        Field::DayOfMonth => pad(out, dt.day() as i64, width),
        Field::DayOfYear => pad(out, dt.ordinal() as i64, width),
        Field::DayName => {
            if width >= 4 {
                out.push_str(&dt.format("%A").to_string());
            } else {
                out.push_str(&dt.format("%a").to_string());
            }
        }
        Field::DayNumber => pad(out, dt.weekday().number_from_monday() as i64, width),
        Field::DayOfWeekInMonth => pad(out, ((dt.day() - 1) / 7 + 1) as i64, width),
        Field::WeekInYear => pad(out, us_week(dt.date()).1 as i64, width),
        Field::WeekInMonth => {
            let first = dt
                .date()
                .with_day(1)
                .map(|d| d.weekday().num_days_from_sunday())
                .unwrap_or(0);
            pad(out, ((dt.day() - 1 + first) / 7 + 1) as i64, width)
        }
        Field::AmPm => out.push_str(if hour < 12 { "AM" } else { "PM" }),
        Field::Hour0To23 => pad(out, hour, width),
        Field::Hour1To24 => pad(out, if hour == 0 { 24 } else { hour }, width),
        Field::Hour0To11 => pad(out, hour % 12, width),
        Field::Hour1To12 => pad(out, if hour % 12 == 0 { 12 } else { hour % 12 }, width),
        Field::Minute => pad(out, dt.minute() as i64, width),
        Field::Second => pad(out, dt.second() as i64, width),
        Field::Millisecond => {
            let millis = (dt.nanosecond() % 1_000_000_000) / 1_000_000;
            pad(out, millis as i64, width)
        }
        Field::ZoneName => {
            if width >= 4 {
                out.push_str("Coordinated Universal Time");
            } else {
                out.push_str("UTC");
            }
        }
        Field::ZoneRfc822 => out.push_str("+0000"),
        Field::ZoneIso => out.push('Z'),
    }
}

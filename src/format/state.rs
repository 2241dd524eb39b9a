//! Lazily compiled formatters for the temporal categories.
//!
//! Each slot is compiled from the first pattern it is asked for and kept for
//! the lifetime of the cursor; later requests with a different pattern reuse
//! the cached formatter. The three slots are independent.

use crate::error::Result;

use super::pattern::DatePattern;

/// Suffix appended to the timestamp pattern for zoned timestamps.
pub const TIMESTAMP_TZ_SUFFIX: &str = " S";

/// Per-cursor formatter cache.
#[derive(Debug, Clone, Default)]
pub struct FormatState {
    date: Option<DatePattern>,
    timestamp: Option<DatePattern>,
    timestamp_tz: Option<DatePattern>,
}

fn get_or_compile<'a>(slot: &'a mut Option<DatePattern>, pattern: &str) -> Result<&'a DatePattern> {
    let compiled = match slot.take() {
        Some(cached) => cached,
        None => {
            let compiled = DatePattern::compile(pattern)?;
            log::debug!("compiled format pattern '{}'", pattern);
            compiled
        }
    };
    Ok(slot.insert(compiled))
}

impl FormatState {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter for DATE/TIME columns.
    pub fn date(&mut self, pattern: &str) -> Result<&DatePattern> {
        get_or_compile(&mut self.date, pattern)
    }

    /// Formatter for TIMESTAMP columns.
    pub fn timestamp(&mut self, pattern: &str) -> Result<&DatePattern> {
        get_or_compile(&mut self.timestamp, pattern)
    }

    /// Formatter for zoned TIMESTAMP columns; `pattern` is the plain
    /// timestamp pattern, the suffix is added here.
    pub fn timestamp_tz(&mut self, pattern: &str) -> Result<&DatePattern> {
        if self.timestamp_tz.is_some() {
            return get_or_compile(&mut self.timestamp_tz, pattern);
        }
        let full = format!("{}{}", pattern, TIMESTAMP_TZ_SUFFIX);
        get_or_compile(&mut self.timestamp_tz, &full)
    }

    /// Pattern currently cached for dates, if any.
    pub fn date_pattern(&self) -> Option<&str> {
        self.date.as_ref().map(DatePattern::pattern)
    }

    /// Pattern currently cached for timestamps, if any.
    pub fn timestamp_pattern(&self) -> Option<&str> {
        self.timestamp.as_ref().map(DatePattern::pattern)
    }

    /// Pattern currently cached for zoned timestamps, if any.
    pub fn timestamp_tz_pattern(&self) -> Option<&str> {
        self.timestamp_tz.as_ref().map(DatePattern::pattern)
    }
}

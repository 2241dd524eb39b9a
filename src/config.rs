//! Export options passed by the caller.

/// Default number of rows the source should buffer per round trip.
pub const DEFAULT_FETCH_SIZE: u32 = 10_000;
/// Default pattern for DATE and TIME columns.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";
/// Default pattern for TIMESTAMP columns.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.S";

/// Options controlling how rows are turned into text.
///
/// Options belong to one materializer; nothing here is shared between
/// cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Fetch-size hint applied to the source at open time.
    pub fetch_size: u32,
    /// Strip leading/trailing characters up to and including U+0020 (space
    /// and ASCII control characters) from every value.
    pub trim: bool,
    /// Pattern for DATE and TIME columns.
    pub date_format: String,
    /// Pattern for TIMESTAMP columns (zoned timestamps append `" S"`).
    pub timestamp_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            fetch_size: DEFAULT_FETCH_SIZE,
            trim: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl ExportOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch-size hint.
    ///
    /// # Example
    ///
    /// ```
    /// use rowset_text::ExportOptions;
    ///
    /// let options = ExportOptions::new()
    ///     .with_fetch_size(500)
    ///     .with_trim(false);
    /// assert_eq!(options.fetch_size, 500);
    /// ```
    pub fn with_fetch_size(mut self, fetch_size: u32) -> Self {
        self.fetch_size = fetch_size;
        self
    }

    /// Enable or disable trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the date pattern.
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    /// Set the timestamp pattern.
    pub fn with_timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format = pattern.into();
        self
    }
}

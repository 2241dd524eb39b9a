//! Value formatting helpers.
//!
//! | Concern | Module |
//! |---------|--------|
//! | date/time patterns | `pattern` |
//! | BLOB hex text | `hex` |
//! | per-cursor formatter cache | `state` |

mod hex;
mod pattern;
mod state;

pub use hex::to_upper_hex;
pub use pattern::DatePattern;
pub use state::{FormatState, TIMESTAMP_TZ_SUFFIX};

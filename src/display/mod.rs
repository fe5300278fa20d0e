//! Record display module
//!
//! Human-readable rendering of a record with metric conversions.

mod formatter;
mod units;

pub use formatter::format_record;

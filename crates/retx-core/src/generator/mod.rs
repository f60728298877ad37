//! Returns CSV generation.

mod clock;
mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use writer::{file_name_for, format_order_date, csv_header, CsvGenerator};

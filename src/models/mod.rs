pub mod entry;
pub mod row;
pub mod summary;

pub use entry::ConfirmedEntry;
pub use row::Row;
pub use summary::{Report, SummaryEntry};

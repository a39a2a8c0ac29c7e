mod range;
mod summary;
mod table;

pub use range::RangeSelector;
pub use summary::HistorySummary;
pub use table::HistoryTable;

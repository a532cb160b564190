pub mod api;
pub mod state;
pub mod ui;

pub use api::HistoryError;
pub use state::{FilterDimension, HistoryFilters, HistoryState, HistoryTable, PageLink, PAGE_SIZE};

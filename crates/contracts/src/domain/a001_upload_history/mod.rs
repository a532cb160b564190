pub mod aggregate;

pub use aggregate::{parse_session_date, UploadHistoryRecord, UNKNOWN_EMPLOYEE};

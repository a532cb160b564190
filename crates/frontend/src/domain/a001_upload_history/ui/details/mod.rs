use contracts::domain::a001_upload_history::UploadHistoryRecord;

use crate::bridge::{PopupButton, PopupParams};
use crate::shared::date_utils::format_session_date;
use crate::shared::number_format::format_file_size;

pub const DETAILS_TITLE: &str = "File Details";

/// Popup body for one record; the errors line only appears when there are errors
pub fn details_message(record: &UploadHistoryRecord) -> String {
    let mut message = format!(
        "File: {}\nSize: {}\nStatus: {}\nDate: {}",
        record.original_name,
        format_file_size(record.file_size),
        record.validation_status,
        format_session_date(&record.session_date),
    );
    if let Some(errors) = record.validation_errors.as_deref().filter(|e| !e.is_empty()) {
        message.push_str("\n\nErrors: ");
        message.push_str(errors);
    }
    message
}

pub fn details_popup(record: &UploadHistoryRecord) -> PopupParams {
    PopupParams {
        title: DETAILS_TITLE.to_string(),
        message: details_message(record),
        buttons: vec![PopupButton::close()],
    }
}

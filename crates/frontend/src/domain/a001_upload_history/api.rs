use contracts::domain::a001_upload_history::UploadHistoryRecord;
use contracts::usecases::u501_file_upload::HISTORY_ENDPOINT;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Header the server uses to scope history to the current user
const USER_ID_HEADER: &str = "X-User-ID";

/// Failure to obtain the history collection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    #[error("Error loading history: {0}")]
    Transport(String),

    #[error("Failed to load history: {0}")]
    Status(u16),

    #[error("Error loading history: {0}")]
    Parse(String),

    /// Body was valid JSON but not an array
    #[error("Invalid data format received from server.")]
    NotASequence,
}

/// Fetch the full upload history
pub async fn fetch_history(user_id: Option<i64>) -> Result<Vec<UploadHistoryRecord>, HistoryError> {
    let mut request = Request::get(&api_url(HISTORY_ENDPOINT));
    if let Some(id) = user_id {
        request = request.header(USER_ID_HEADER, &id.to_string());
    }

    let response = request
        .send()
        .await
        .map_err(|e| HistoryError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(HistoryError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| HistoryError::Transport(e.to_string()))?;

    parse_history(&body)
}

/// Decode a history body; anything but a JSON array is `NotASequence`
pub fn parse_history(body: &str) -> Result<Vec<UploadHistoryRecord>, HistoryError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| HistoryError::Parse(e.to_string()))?;

    if !value.is_array() {
        return Err(HistoryError::NotASequence);
    }

    serde_json::from_value(value).map_err(|e| HistoryError::Parse(e.to_string()))
}

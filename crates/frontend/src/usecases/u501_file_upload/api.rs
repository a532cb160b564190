use contracts::usecases::u501_file_upload::{UploadResponse, UPLOAD_ENDPOINT, UPLOAD_FIELD};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Upload one file as `multipart/form-data` with the single field `file`
pub async fn upload_file(file: web_sys::File) -> Result<UploadResponse, UploadError> {
    let form_data = FormData::new().map_err(|e| UploadError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob(UPLOAD_FIELD, &file)
        .map_err(|e| UploadError::Request(format!("{e:?}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(UPLOAD_ENDPOINT);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| UploadError::Request(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| UploadError::Request("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UploadError::Request(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| UploadError::Request(format!("{e:?}")))?;

    let text = read_text(&resp).await;

    if !resp.ok() {
        let message = text
            .ok()
            .and_then(|t| serde_json::from_str::<UploadResponse>(&t).ok())
            .and_then(|r| r.error);
        return Err(UploadError::Status {
            status: resp.status(),
            message,
        });
    }

    parse_upload_response(&text?)
}

async fn read_text(resp: &Response) -> Result<String, UploadError> {
    let promise = resp
        .text()
        .map_err(|e| UploadError::InvalidResponse(format!("{e:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| UploadError::InvalidResponse(format!("{e:?}")))?;
    text.as_string()
        .ok_or_else(|| UploadError::InvalidResponse("bad text".to_string()))
}

/// A success status still needs a JSON body to count as uploaded
pub fn parse_upload_response(body: &str) -> Result<UploadResponse, UploadError> {
    serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_response() {
        let ok = parse_upload_response(r#"{"message": "File uploaded successfully"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("File uploaded successfully"));
        assert!(matches!(
            parse_upload_response("OK"),
            Err(UploadError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_status_error_message() {
        let err = UploadError::Status {
            status: 400,
            message: Some("Maximum file limit reached (4/4)".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 400: Maximum file limit reached (4/4)");
        let err = UploadError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 502");
    }
}

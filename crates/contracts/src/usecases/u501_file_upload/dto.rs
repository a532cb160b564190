use serde::{Deserialize, Serialize};

/// Multipart upload endpoint
pub const UPLOAD_ENDPOINT: &str = "/api/upload";

/// Upload history endpoint
pub const HISTORY_ENDPOINT: &str = "/api/history";

/// Name of the single multipart field carrying the file
pub const UPLOAD_FIELD: &str = "file";

/// Maximum number of file entries a user may have on screen
pub const MAX_FILES: usize = 4;

/// Body of `POST /api/upload`.
///
/// `{"message": "File uploaded successfully"}` on success,
/// `{"error": "Maximum file limit reached (4/4)"}` on rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

pub mod dto;

pub use dto::{UploadResponse, HISTORY_ENDPOINT, MAX_FILES, UPLOAD_ENDPOINT, UPLOAD_FIELD};

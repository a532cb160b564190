pub mod a001_upload_history;

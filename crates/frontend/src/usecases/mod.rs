pub mod u501_file_upload;

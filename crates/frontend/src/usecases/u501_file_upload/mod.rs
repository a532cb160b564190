pub mod api;
pub mod model;
pub mod sequencer;
pub mod view;

pub use model::{AdmissionError, EntryId, FileEntry, UploadQueue, UploadStatus};
pub use sequencer::{submit_files, BatchOutcome, UploadFile, UploadSink};
pub use view::UploadPanel;

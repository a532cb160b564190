//! Sequential batch upload.
//!
//! Files of one batch go up strictly one after another: an entry is appended,
//! its request awaited, its status set, and only then the next file starts.
//! Entry order on screen therefore always equals submission order.

use std::future::Future;

use leptos::prelude::*;

use super::api::UploadError;
use super::model::{admit, AdmissionError, EntryId, UploadQueue, UploadStatus};

/// A file that can be listed before upload
pub trait UploadFile {
    fn file_name(&self) -> String;
    fn file_size(&self) -> u64;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn file_size(&self) -> u64 {
        self.size() as u64
    }
}

/// Where upload entries are displayed
pub trait UploadSink {
    fn used_slots(&self) -> usize;
    fn begin(&self, name: String, size: u64) -> EntryId;
    fn finish(&self, id: EntryId, status: UploadStatus);
}

impl UploadSink for RwSignal<UploadQueue> {
    fn used_slots(&self) -> usize {
        self.with_untracked(|q| q.len())
    }

    fn begin(&self, name: String, size: u64) -> EntryId {
        self.try_update(|q| q.begin(name, size)).unwrap_or_default()
    }

    fn finish(&self, id: EntryId, status: UploadStatus) {
        self.update(|q| q.finish(id, status));
    }
}

/// Per-file outcomes of an admitted batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub uploaded: usize,
    pub failed: usize,
}

/// Admit a batch and upload its files one at a time.
///
/// A refused batch issues no request. Within an admitted batch a failure
/// only marks its own entry; the remaining files are still sent.
/// `on_uploaded` runs after every successful file.
pub async fn submit_files<S, F, U, Fut>(
    sink: &S,
    files: Vec<F>,
    upload: U,
    on_uploaded: impl Fn(),
) -> Result<BatchOutcome, AdmissionError>
where
    S: UploadSink,
    F: UploadFile,
    U: Fn(F) -> Fut,
    Fut: Future<Output = Result<(), UploadError>>,
{
    admit(sink.used_slots(), files.len())?;

    let mut outcome = BatchOutcome::default();
    for file in files {
        let name = file.file_name();
        let id = sink.begin(name.clone(), file.file_size());

        match upload(file).await {
            Ok(()) => {
                sink.finish(id, UploadStatus::Uploaded);
                outcome.uploaded += 1;
                on_uploaded();
            }
            Err(e) => {
                log::error!("Upload error for {}: {}", name, e);
                sink.finish(id, UploadStatus::Failed);
                outcome.failed += 1;
            }
        }
    }
    Ok(outcome)
}

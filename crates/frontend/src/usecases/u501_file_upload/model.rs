use contracts::usecases::u501_file_upload::MAX_FILES;
use thiserror::Error;

/// Why a batch was refused; the text is shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("Cannot upload {requested} files. You can only upload up to {max} files ({used}/{max} used, {remaining} left).")]
    QuotaExceeded {
        requested: usize,
        used: usize,
        remaining: usize,
        max: usize,
    },

    #[error("You can only upload 1 more file ({used}/{max} used).")]
    OneSlotLeft { used: usize, max: usize },
}

/// Admission policy for one batch, checked before anything is uploaded
pub fn admit(used: usize, requested: usize) -> Result<(), AdmissionError> {
    if used + requested > MAX_FILES {
        return Err(AdmissionError::QuotaExceeded {
            requested,
            used,
            remaining: MAX_FILES.saturating_sub(used),
            max: MAX_FILES,
        });
    }
    if used == MAX_FILES - 1 && requested > 1 {
        return Err(AdmissionError::OneSlotLeft {
            used,
            max: MAX_FILES,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Uploaded,
    Failed,
}

impl UploadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Uploading...",
            UploadStatus::Uploaded => "Uploaded successfully",
            UploadStatus::Failed => "Upload failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "file-status",
            UploadStatus::Uploaded => "file-status status-success",
            UploadStatus::Failed => "file-status status-error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

/// One file shown in the upload list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub id: EntryId,
    pub name: String,
    pub size: u64,
    pub status: UploadStatus,
}

/// Files shown on screen. Entries are never removed, so each one holds a slot
/// for the lifetime of the page whatever its outcome.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    entries: Vec<FileEntry>,
    next_id: u64,
}

impl UploadQueue {
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn admit(&self, requested: usize) -> Result<(), AdmissionError> {
        admit(self.len(), requested)
    }

    /// Append an entry in the uploading state
    pub fn begin(&mut self, name: String, size: u64) -> EntryId {
        self.next_id += 1;
        let id = EntryId(self.next_id);
        self.entries.push(FileEntry {
            id,
            name,
            size,
            status: UploadStatus::Uploading,
        });
        id
    }

    pub fn finish(&mut self, id: EntryId, status: UploadStatus) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = status;
        }
    }
}

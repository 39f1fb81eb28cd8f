//! Per-batch upload bookkeeping
//!
//! The session mirrors what the upload dialog needs to know: which files
//! the server has stored so far (with their inferred roles), whether the
//! current batch has fully finished, and whether the user is still in
//! "run example data" mode. Completion events may arrive in any order;
//! each file's record depends only on its own event.

use std::collections::HashMap;

use super::classifier::classify;
use super::types::FileRole;

/// Where the current batch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchState {
    #[default]
    Idle,
    InProgress,
    AllFinished,
}

/// Record of one stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedEntry {
    pub role: FileRole,
    pub temp_filename: String,
}

#[derive(Debug, Default)]
pub struct UploadSession {
    uploaded_files: HashMap<String, UploadedEntry>,
    state: BatchState,
    run_example_data: bool,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in "run example data" mode; queuing any real file leaves it.
    pub fn with_example_data() -> Self {
        Self {
            run_example_data: true,
            ..Self::default()
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn all_finished(&self) -> bool {
        self.state == BatchState::AllFinished
    }

    pub fn run_example_data(&self) -> bool {
        self.run_example_data
    }

    pub fn uploaded_files(&self) -> &HashMap<String, UploadedEntry> {
        &self.uploaded_files
    }

    /// Queuing a file cancels example-data mode and (re)opens the batch.
    pub fn file_added(&mut self) {
        self.run_example_data = false;
        self.state = BatchState::InProgress;
    }

    /// One file finished transferring; merge it into the record map under
    /// its original filename.
    pub fn file_uploaded(&mut self, filename: &str, temp_filename: &str) {
        let role = classify(filename);
        self.uploaded_files.insert(
            filename.to_string(),
            UploadedEntry {
                role,
                temp_filename: temp_filename.to_string(),
            },
        );
    }

    /// Every file in the current batch has completed transfer.
    pub fn all_uploads_finished(&mut self) {
        self.state = BatchState::AllFinished;
    }

    /// Removing a file drops its record and clears the finished signal.
    /// Returns the dropped entry so the caller can revert it server-side.
    pub fn file_removed(&mut self, filename: &str) -> Option<UploadedEntry> {
        let entry = self.uploaded_files.remove(filename);
        self.state = if self.uploaded_files.is_empty() {
            BatchState::Idle
        } else {
            BatchState::InProgress
        };
        entry
    }

    /// Forget everything, e.g. when the user switches input format.
    pub fn reset(&mut self) {
        let run_example_data = self.run_example_data;
        *self = Self {
            run_example_data,
            ..Self::default()
        };
    }
}

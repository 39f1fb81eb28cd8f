mod classifier;
mod client;
mod session;
mod types;

pub use classifier::classify;
pub use client::SubmissionClient;
pub use session::{BatchState, UploadSession, UploadedEntry};
pub use types::{FileRole, FileStatus, UploadStatus, UploadedFile};

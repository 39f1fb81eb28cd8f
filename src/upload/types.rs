#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    Input,
    Dictionary,
    Mapping,
}

impl FileRole {
    /// Tag recorded next to the temp filename, matching what the server
    /// expects in later processing steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileRole::Input => "input-file",
            FileRole::Dictionary => "redcap-dictionary",
            FileRole::Mapping => "mapping-file",
        }
    }
}

#[derive(Debug, Clone)]
pub enum UploadStatus {
    Processing,
    Success,
    Error(String),
    Skipped(String),
}

#[derive(Debug, Clone)]
pub struct FileStatus {
    pub name: String,
    pub status: UploadStatus,
}

/// A file the server has stored, keyed by its original name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub role: FileRole,
    pub temp_filename: String,
}

//! Error handling for the uploader

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploaderError {
    #[error("unknown input format: {0}")]
    UnknownFormat(String),

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("{filename}: unsupported extension, expected one of: {expected}")]
    UnsupportedExtension { filename: String, expected: String },

    #[error("{filename} is {size}, maximum file size is {limit}")]
    FileTooLarge {
        filename: String,
        size: String,
        limit: String,
    },

    #[error("{given} files queued but the {format} format expects at most {expected}")]
    TooManyFiles {
        format: String,
        given: usize,
        expected: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upload failed with status: {0}")]
    UploadFailed(reqwest::StatusCode),

    #[error("malformed server response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, UploaderError>;

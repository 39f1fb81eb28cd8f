use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use log::{debug, warn};
use reqwest::multipart;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Result, UploaderError};
use crate::format::InputFormat;
use crate::upload::classifier::classify;
use crate::upload::session::UploadSession;
use crate::upload::types::{FileStatus, UploadStatus, UploadedFile};
use crate::utils::file_size::human_size;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    temp_filename: String,
}

/// Client for the `/api/submission/upload` endpoint.
///
/// Validates queued files against the active format's expectations, posts
/// them one by one with the configured bearer token, and reports per-file
/// progress over an mpsc channel so a host can render it.
#[derive(Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    config: Config,
    format: InputFormat,
}

impl SubmissionClient {
    pub fn new(config: Config, format: InputFormat) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            format,
        }
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/api/submission/upload",
            self.config.api_base_url.trim_end_matches('/')
        )
    }

    /// Check the whole batch against the format's expectations before
    /// anything is sent.
    pub fn validate_batch(&self, paths: &[PathBuf]) -> Result<()> {
        let spec = self.format.spec();
        if paths.len() > spec.file_count {
            return Err(UploaderError::TooManyFiles {
                format: self.format.to_string(),
                given: paths.len(),
                expected: spec.file_count,
            });
        }
        for path in paths {
            self.validate_file(path)?;
        }
        Ok(())
    }

    pub fn validate_file(&self, path: &Path) -> Result<()> {
        let file_name = file_name_of(path)?;
        let spec = self.format.spec();

        if !spec.accepts_extension(&file_name) {
            return Err(UploaderError::UnsupportedExtension {
                filename: file_name,
                expected: spec.extensions.join(", "),
            });
        }

        let size = std::fs::metadata(path)?.len();
        if size > self.config.max_file_size {
            return Err(UploaderError::FileTooLarge {
                filename: file_name,
                size: human_size(size),
                limit: human_size(self.config.max_file_size),
            });
        }

        Ok(())
    }

    /// Upload every queued file in turn, driving the session through its
    /// lifecycle and reporting per-file statuses on the channel.
    pub async fn process_files(
        &self,
        paths: &[PathBuf],
        session: &mut UploadSession,
        status_sender: &Sender<FileStatus>,
    ) -> Vec<UploadedFile> {
        let mut uploaded_files = Vec::new();
        let mut failed = 0usize;

        for path in paths {
            session.file_added();

            let file_name = match file_name_of(path) {
                Ok(name) => name,
                Err(e) => {
                    warn!("skipping {}: {}", path.display(), e);
                    failed += 1;
                    status_sender
                        .send(FileStatus {
                            name: path.display().to_string(),
                            status: UploadStatus::Error(e.to_string()),
                        })
                        .unwrap_or_default();
                    continue;
                }
            };

            status_sender
                .send(FileStatus {
                    name: file_name.clone(),
                    status: UploadStatus::Processing,
                })
                .unwrap_or_default();

            match self.upload_file(path).await {
                Ok(file) => {
                    session.file_uploaded(&file.name, &file.temp_filename);
                    status_sender
                        .send(FileStatus {
                            name: file_name,
                            status: UploadStatus::Success,
                        })
                        .unwrap_or_default();
                    uploaded_files.push(file);
                }
                Err(e) => {
                    failed += 1;
                    status_sender
                        .send(FileStatus {
                            name: file_name,
                            status: UploadStatus::Error(e.to_string()),
                        })
                        .unwrap_or_default();
                }
            }
        }

        if failed == 0 && !uploaded_files.is_empty() {
            session.all_uploads_finished();
        }

        uploaded_files
    }

    /// Upload a single file and return its server-side record.
    ///
    /// A response without the expected `tempFilename` field is fatal for
    /// this file; no retry happens at this layer.
    pub async fn upload_file(&self, path: &Path) -> Result<UploadedFile> {
        let file_name = file_name_of(path)?;
        self.validate_file(path)?;

        let content = tokio::fs::read(path).await?;
        let part = multipart::Part::bytes(content)
            .file_name(file_name.clone())
            .mime_str(content_type_for(&file_name))?;
        let form = multipart::Form::new().part("files", part);

        debug!("uploading {} to {}", file_name, self.upload_url());

        let response = self
            .client
            .post(self.upload_url())
            .bearer_auth(&self.config.auth_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploaderError::UploadFailed(status));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploaderError::MalformedResponse(e.to_string()))?;

        Ok(UploadedFile {
            role: classify(&file_name),
            name: file_name,
            temp_filename: body.temp_filename,
        })
    }

    /// Ask the server to discard a stored file, using the same endpoint
    /// and auth as the upload. Pair with `UploadSession::file_removed`.
    pub async fn revert_file(&self, temp_filename: &str) -> Result<()> {
        debug!("reverting {} at {}", temp_filename, self.upload_url());

        let response = self
            .client
            .delete(self.upload_url())
            .bearer_auth(&self.config.auth_token)
            .body(temp_filename.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploaderError::UploadFailed(status));
        }
        Ok(())
    }
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| UploaderError::InvalidFilename(path.display().to_string()))
}

/// MIME type sent with each multipart part, from the server's accepted
/// list. Compound suffixes are checked first.
fn content_type_for(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".sql.gz") {
        return "application/x-sql";
    }
    match lower.rsplit('.').next().unwrap_or_default() {
        "csv" => "text/csv",
        "tsv" => "text/tsv",
        "json" => "application/json",
        "sql" => "application/sql",
        "yaml" | "yml" => "application/x-yaml",
        _ => "text/plain",
    }
}

//! Client library for uploading phenotype submission files to a
//! Convert-Pheno server.
//!
//! The server expects each submission in one of a closed set of input
//! formats (REDCap, CDISC, BFF, PXF, OMOP), each with its own expected
//! file count and extensions. Uploaded files are classified by role
//! (input, dictionary, mapping) from their filename and posted one by
//! one to the submission endpoint with a bearer token.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod upload;
pub mod utils;

pub use config::Config;
pub use error::{Result, UploaderError};
pub use format::{FormatSpec, InputFormat};

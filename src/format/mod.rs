//! Per-format upload expectations
//!
//! The server accepts submissions in a closed set of input formats. Each
//! format prescribes how many files the upload dialog expects, what the
//! files are called, and which extensions are allowed. CDISC submissions
//! reuse the REDCap layout and PXF reuses BFF, so those pairs share one
//! spec each.

use std::fmt;
use std::str::FromStr;

use crate::error::UploaderError;

/// Closed set of submission input formats understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Redcap,
    Cdisc,
    Bff,
    Pxf,
    Omop,
}

/// Upload expectations for one input format.
#[derive(Debug, PartialEq, Eq)]
pub struct FormatSpec {
    /// How many files a complete submission consists of.
    pub file_count: usize,
    /// Role labels in the order the user is expected to provide them.
    pub roles: &'static [&'static str],
    /// Accepted file extensions, lowercase, compound suffixes allowed.
    pub extensions: &'static [&'static str],
    /// Help text shown to the user alongside the upload dialog.
    pub info: &'static [&'static str],
}

static REDCAP_SPEC: FormatSpec = FormatSpec {
    file_count: 3,
    roles: &["Input", "Dictionary", "Mapping"],
    extensions: &["csv", "tsv", "txt", "yaml", "yml", "json"],
    info: &[
        "The input-file & dictionary can be a .csv, .tsv or .txt",
        "Make sure that the input and the dictionary have the same separator",
        "mapping-file can be .yaml, .yml or .json",
    ],
};

static BFF_SPEC: FormatSpec = FormatSpec {
    file_count: 1,
    roles: &["Input-file"],
    extensions: &["json"],
    info: &["input has to be a .json"],
};

static OMOP_SPEC: FormatSpec = FormatSpec {
    file_count: 1,
    roles: &["Input-file"],
    extensions: &["sql", "sql.gz"],
    info: &["input has to be a .sql or sql.gz"],
};

impl InputFormat {
    /// All formats, in selector order.
    pub const ALL: [InputFormat; 5] = [
        InputFormat::Redcap,
        InputFormat::Cdisc,
        InputFormat::Bff,
        InputFormat::Pxf,
        InputFormat::Omop,
    ];

    /// Resolve this format's upload expectations. Aliased formats return
    /// the same static spec, not a copy.
    pub fn spec(&self) -> &'static FormatSpec {
        match self {
            InputFormat::Redcap | InputFormat::Cdisc => &REDCAP_SPEC,
            InputFormat::Bff | InputFormat::Pxf => &BFF_SPEC,
            InputFormat::Omop => &OMOP_SPEC,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Redcap => "redcap",
            InputFormat::Cdisc => "cdisc",
            InputFormat::Bff => "bff",
            InputFormat::Pxf => "pxf",
            InputFormat::Omop => "omop",
        }
    }
}

impl FromStr for InputFormat {
    type Err = UploaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redcap" => Ok(InputFormat::Redcap),
            "cdisc" => Ok(InputFormat::Cdisc),
            "bff" => Ok(InputFormat::Bff),
            "pxf" => Ok(InputFormat::Pxf),
            "omop" => Ok(InputFormat::Omop),
            other => Err(UploaderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatSpec {
    /// One-line description of the expected files, e.g.
    /// `Input & Dictionary & Mapping`.
    pub fn label_text(&self) -> String {
        self.roles.join(" & ")
    }

    /// Help lines joined for one-line display.
    pub fn info_text(&self) -> String {
        self.info.join(", ")
    }

    /// Whether a filename carries one of the accepted extensions.
    /// Matched as a suffix so compound extensions like `sql.gz` work.
    pub fn accepts_extension(&self, filename: &str) -> bool {
        let lower = filename.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{ext}")))
    }
}

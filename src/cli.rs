//! Command line interface

use std::path::PathBuf;

use clap::Parser;

use crate::format::InputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pheno-uploader",
    version,
    about = "Upload phenotype submission files to a Convert-Pheno server"
)]
pub struct Cli {
    /// Base URL of the submission API
    #[arg(long)]
    pub api_url: String,

    /// Bearer token for the Authorization header
    /// (falls back to the PHENO_UPLOADER_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Input format of the submission: redcap, cdisc, bff, pxf or omop
    #[arg(long)]
    pub format: InputFormat,

    /// Files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Classify and validate the files without contacting the server
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_redcap_invocation() {
        let cli = Cli::parse_from([
            "pheno-uploader",
            "--api-url",
            "https://convert-pheno.example.org",
            "--token",
            "secret",
            "--format",
            "redcap",
            "data.csv",
            "dictionary.csv",
            "mapping.yaml",
        ]);

        assert_eq!(cli.format, InputFormat::Redcap);
        assert_eq!(cli.files.len(), 3);
        assert!(!cli.dry_run);
    }

    #[test]
    fn rejects_an_unknown_format() {
        let result = Cli::try_parse_from([
            "pheno-uploader",
            "--api-url",
            "https://convert-pheno.example.org",
            "--format",
            "vcf",
            "data.csv",
        ]);
        assert!(result.is_err());
    }
}

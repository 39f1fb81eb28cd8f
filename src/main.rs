use std::env;
use std::process;
use std::sync::mpsc::channel;

use clap::Parser;
use log::{debug, error, info};

use pheno_uploader::cli::Cli;
use pheno_uploader::config::Config;
use pheno_uploader::upload::{classify, SubmissionClient, UploadSession, UploadStatus};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let token = match cli.token.or_else(|| env::var("PHENO_UPLOADER_TOKEN").ok()) {
        Some(token) => token,
        None => {
            eprintln!("no auth token given: pass --token or set PHENO_UPLOADER_TOKEN");
            process::exit(2);
        }
    };

    let config = Config::new(cli.api_url, token);
    let client = SubmissionClient::new(config, cli.format);

    if let Err(e) = client.validate_batch(&cli.files) {
        eprintln!("error: {e}");
        process::exit(2);
    }

    let spec = cli.format.spec();
    info!(
        "format {}: expects {} file(s): {}",
        cli.format,
        spec.file_count,
        spec.label_text()
    );
    debug!("{}", spec.info_text());

    if cli.dry_run {
        for path in &cli.files {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            println!("{name}: {}", classify(name).as_str());
        }
        return;
    }

    let files = cli.files.clone();
    let (status_sender, status_receiver) = channel();
    let (result_sender, result_receiver) = channel();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");
        rt.block_on(async {
            let mut session = UploadSession::new();
            let uploaded = client
                .process_files(&files, &mut session, &status_sender)
                .await;
            let _ = result_sender.send((session, uploaded));
        });
    });

    // The status channel closes when the worker drops its sender.
    let mut failed = 0usize;
    for status in status_receiver {
        match status.status {
            UploadStatus::Processing => info!("uploading {}", status.name),
            UploadStatus::Success => println!("✅ {}", status.name),
            UploadStatus::Error(e) => {
                failed += 1;
                eprintln!("❌ {} - {}", status.name, e);
            }
            UploadStatus::Skipped(reason) => println!("⏩ {} - {}", status.name, reason),
        }
    }

    let Ok((session, uploaded)) = result_receiver.recv() else {
        eprintln!("upload worker exited unexpectedly");
        process::exit(1);
    };

    for file in &uploaded {
        println!(
            "{} -> {} ({})",
            file.name,
            file.temp_filename,
            file.role.as_str()
        );
    }

    if session.all_finished() {
        println!("All {} file(s) uploaded", uploaded.len());
    }
    if failed > 0 {
        error!("{failed} upload(s) failed");
        process::exit(1);
    }
}

//! Integration tests for the submission upload client

use std::fs::File;
use std::io::Write;

use pheno_uploader::config::Config;
use pheno_uploader::upload::{
    classify, BatchState, FileRole, SubmissionClient, UploadSession,
};
use pheno_uploader::{InputFormat, UploaderError};

#[test]
fn redcap_submission_files_get_their_expected_roles() {
    assert_eq!(classify("dictionary.csv"), FileRole::Dictionary);
    assert_eq!(classify("mapping.yaml"), FileRole::Mapping);
    assert_eq!(classify("patients.csv"), FileRole::Input);
}

#[test]
fn bff_submission_is_a_single_json_input() {
    let format: InputFormat = "bff".parse().unwrap();
    assert_eq!(format.spec().file_count, 1);
    assert_eq!(classify("patients.json"), FileRole::Input);
}

#[test]
fn format_aliases_resolve_to_the_same_spec() {
    let cdisc: InputFormat = "cdisc".parse().unwrap();
    let redcap: InputFormat = "redcap".parse().unwrap();
    assert!(std::ptr::eq(cdisc.spec(), redcap.spec()));

    let pxf: InputFormat = "pxf".parse().unwrap();
    let bff: InputFormat = "bff".parse().unwrap();
    assert!(std::ptr::eq(pxf.spec(), bff.spec()));
}

#[test]
fn unknown_format_fails_fast() {
    let err = "fhir".parse::<InputFormat>().unwrap_err();
    assert!(matches!(err, UploaderError::UnknownFormat(_)));
}

#[test]
fn out_of_order_completion_fills_the_record_map() {
    // the widget fires per-file callbacks in whatever order transfers
    // finish; the record map must end up the same either way
    let mut session = UploadSession::new();
    session.file_added();
    session.file_added();

    session.file_uploaded("mapping.yaml", "tmp-b");
    session.file_uploaded("patients.csv", "tmp-a");
    session.all_uploads_finished();

    let files = session.uploaded_files();
    assert_eq!(files.len(), 2);
    assert_eq!(files["patients.csv"].temp_filename, "tmp-a");
    assert_eq!(files["patients.csv"].role, FileRole::Input);
    assert_eq!(files["mapping.yaml"].temp_filename, "tmp-b");
    assert_eq!(files["mapping.yaml"].role, FileRole::Mapping);
    assert!(session.all_finished());
}

#[test]
fn removing_a_file_reopens_the_batch() {
    let mut session = UploadSession::new();
    session.file_added();
    session.file_uploaded("patients.json", "tmp-1");
    session.all_uploads_finished();

    let dropped = session.file_removed("patients.json").unwrap();
    assert_eq!(dropped.temp_filename, "tmp-1");
    assert!(!session.all_finished());
    assert_eq!(session.state(), BatchState::Idle);
}

#[test]
fn queuing_a_file_cancels_example_data_mode() {
    let mut session = UploadSession::with_example_data();
    session.file_added();
    assert!(!session.run_example_data());
}

#[test]
fn batch_validation_enforces_format_expectations() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("patients.json");
    let csv = dir.path().join("patients.csv");
    File::create(&json).unwrap();
    File::create(&csv).unwrap();

    let config = Config::new("https://convert-pheno.example.org", "secret");

    let bff = SubmissionClient::new(config.clone(), InputFormat::Bff);
    assert!(bff.validate_batch(std::slice::from_ref(&json)).is_ok());
    assert!(matches!(
        bff.validate_batch(std::slice::from_ref(&csv)).unwrap_err(),
        UploaderError::UnsupportedExtension { .. }
    ));
    assert!(matches!(
        bff.validate_batch(&[json.clone(), json.clone()]).unwrap_err(),
        UploaderError::TooManyFiles { .. }
    ));
}

#[test]
fn size_limit_is_enforced_locally() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    let mut file = File::create(&path).unwrap();
    file.write_all(br#"[{"id": "PH-0001"}, {"id": "PH-0002"}]"#)
        .unwrap();

    let mut config = Config::new("https://convert-pheno.example.org", "secret");
    config.max_file_size = 16;

    let client = SubmissionClient::new(config, InputFormat::Bff);
    let err = client.validate_file(&path).unwrap_err();
    assert!(matches!(err, UploaderError::FileTooLarge { .. }));
}

#[tokio::test]
async fn upload_against_an_unreachable_server_surfaces_a_request_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    File::create(&path).unwrap();

    // discard port on loopback, connection is refused immediately
    let config = Config::new("http://127.0.0.1:9", "secret");
    let client = SubmissionClient::new(config, InputFormat::Pxf);

    let err = client.upload_file(&path).await.unwrap_err();
    assert!(matches!(err, UploaderError::Request(_)));
}

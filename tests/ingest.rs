// tests/ingest.rs
//! CSV ingestion: column validation and malformed-row tolerance.

use pathway_network_analyzer::data::csv::load_player_data;
use pathway_network_analyzer::data::DataError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

#[test]
fn loads_well_formed_rows() {
    let file = write_csv(
        "Player ID,Name,Competition,Type,Category,Age in Season,Played Minutes\n\
         1,Alba,Super League,domestic league,U19,18,1200\n\
         1,Alba,International,international,A Nationalteam,24,180\n\
         2,Baro,Challenge League,domestic league,U21,20,900\n",
    );

    let report = load_player_data(file.path().to_str().unwrap()).expect("load csv");
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.skipped_rows, 0);

    let first = &report.records[0];
    assert_eq!(first.player_id, 1);
    assert_eq!(first.player_name, "Alba");
    assert_eq!(first.competition, "Super League");
    assert_eq!(first.competition_type, "domestic league");
    assert_eq!(first.category, "U19");
    assert_eq!(first.age_in_season, 18);
    assert_eq!(first.played_minutes, 1200);
}

#[test]
fn missing_required_column_is_fatal() {
    // no "Played Minutes" column
    let file = write_csv(
        "Player ID,Name,Competition,Type,Category,Age in Season\n\
         1,Alba,Super League,domestic league,U19,18\n",
    );

    let error = load_player_data(file.path().to_str().unwrap())
        .expect_err("missing column must abort the load");
    match error {
        DataError::MissingColumn(column) => assert_eq!(column, "Played Minutes"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn malformed_rows_are_skipped_and_counted() {
    let file = write_csv(
        "Player ID,Name,Competition,Type,Category,Age in Season,Played Minutes\n\
         1,Alba,Super League,domestic league,U19,18,1200\n\
         2,Baro,Super League,domestic league,U19,unknown,800\n\
         3,Ciro,Super League,domestic league,U19,19,-45\n\
         4,Dario,Challenge League,domestic league,U21,20,600\n",
    );

    let report = load_player_data(file.path().to_str().unwrap()).expect("load csv");

    // the non-numeric age and the negative minutes rows are dropped
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.skipped_rows, 2);
    assert!(report.records.iter().all(|record| record.player_id != 2));
    assert!(report.records.iter().all(|record| record.player_id != 3));
}

#[test]
fn missing_file_is_reported() {
    let error = load_player_data("/nonexistent/players.csv")
        .expect_err("missing file must be surfaced");
    assert!(matches!(error, DataError::FileNotFound(_)));
}

use std::fs;
use std::io::Write;

use retrolens_core::{analyze, normalize, NormalizeError};
use retrolens_ingest::{decode_rows, DecodeError};
use tempfile::NamedTempFile;

#[test]
fn csv_export_flows_through_to_dashboard_datasets() {
    let mut file = NamedTempFile::new().expect("temp file creation failed");
    writeln!(file, "Epic,Issue key,Module,Assignee,Story Points,Fix Version,Sprints").unwrap();
    writeln!(file, "Checkout,PROJ-1,Payments,Ada,3,R1,1").unwrap();
    writeln!(file, "Checkout,PROJ-2,Payments,Grace,5,R1,2").unwrap();
    writeln!(file, "Search,PROJ-3,Discovery,Ada,2,R2,1").unwrap();

    let bytes = fs::read(file.path()).expect("temp file read failed");
    let decoded = decode_rows(&bytes).expect("decode failed");
    assert_eq!(decoded.decoder, "delimited");
    assert_eq!(decoded.rows.len(), 3);

    let dashboard = analyze(&decoded.rows).expect("analyze failed");

    assert_eq!(dashboard.summary.total_points, 10.0);
    assert_eq!(dashboard.summary.total_items, 3);
    assert_eq!(dashboard.velocity.len(), 2);
    assert_eq!(dashboard.velocity[0].release, "R1");
    assert_eq!(dashboard.velocity[0].total_points, 8.0);
    assert_eq!(dashboard.burn_up[1].cumulative_points, 10.0);

    let payments = dashboard
        .effort
        .rows
        .iter()
        .find(|row| row.module == "Payments")
        .expect("missing Payments module row");
    assert_eq!(payments.points_by_assignee["Ada"], 3.0);
    assert_eq!(payments.points_by_assignee["Grace"], 5.0);

    let discovery = dashboard
        .effort
        .rows
        .iter()
        .find(|row| row.module == "Discovery")
        .expect("missing Discovery module row");
    assert_eq!(discovery.points_by_assignee["Grace"], 0.0);
}

#[test]
fn header_only_export_surfaces_the_empty_input_failure() {
    let decoded = decode_rows(b"Epic,Story Points,Fix Version\n").expect("decode failed");
    assert!(decoded.rows.is_empty());

    match normalize(&decoded.rows) {
        Err(NormalizeError::EmptyInput) => {}
        other => panic!("expected EmptyInput error, got {other:?}"),
    }
}

#[test]
fn undecodable_payload_is_a_single_opaque_failure() {
    let garbage = [0x00u8, 0x83, 0xff, 0x17, 0x2a];
    match decode_rows(&garbage) {
        Err(DecodeError::NoMatchingDecoder { .. }) => {}
        other => panic!("expected NoMatchingDecoder error, got {other:?}"),
    }
}

//! End-to-end pipeline tests: grid -> header inference -> records -> locator.

use qrid_grid::Grid;
use qrid_locator::{decode, encode, encode_all};
use qrid_records::{infer_header, Record, RecordBuilder};

const BASE_URL: &str = "https://qrid.example.com/";

#[test]
fn banner_sheet_end_to_end() {
    let grid = Grid::from_rows(vec![
        vec!["", "", ""],
        vec!["Title Banner", "", ""],
        vec!["Name", "Email", "Original Cost"],
        vec!["Ann", "ann@x.com", ""],
        vec!["", "", ""],
    ]);

    let selection = infer_header(&grid).expect("sheet has data");
    assert_eq!(selection.header_row, 2);
    assert_eq!(selection.active_columns, vec![0, 1, 2]);

    let records = RecordBuilder::new().build(&grid, &selection);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("Name"), Some("Ann"));
    assert_eq!(records[0].get("Email"), Some("ann@x.com"));
    assert_eq!(records[0].get("Original Cost"), Some("No Original Cost"));

    let url = encode(BASE_URL, &records[0]);
    assert_eq!(
        url,
        "https://qrid.example.com/Name=Ann; Email=ann@x.com; Original Cost=No Original Cost"
    );
}

#[test]
fn records_round_trip_through_locator() {
    let grid = Grid::from_rows(vec![
        vec!["Quarterly Export", "", "", ""],
        vec!["Name", "Dept", "Location", "Original Cost"],
        vec!["Ann", "Eng", "HQ", "120"],
        vec!["Bo", "Ops", "", ""],
    ]);

    let selection = infer_header(&grid).expect("sheet has data");
    let records = RecordBuilder::new().build(&grid, &selection);
    let urls = encode_all(BASE_URL, &records);
    assert_eq!(urls.len(), 2);

    for (record, url) in records.iter().zip(&urls) {
        let path = url.strip_prefix(BASE_URL).expect("base url prefix");
        let back: Record = decode(path).into_iter().collect();
        assert_eq!(&back, record);
    }

    // Bo's blank location was omitted, the blank cost got its sentinel
    let bo = decode(urls[1].strip_prefix(BASE_URL).unwrap());
    assert_eq!(
        bo,
        vec![
            ("Name".to_string(), "Bo".to_string()),
            ("Dept".to_string(), "Ops".to_string()),
            ("Original Cost".to_string(), "No Original Cost".to_string()),
        ]
    );
}

#[test]
fn manual_entry_uses_the_same_codec() {
    let record = Record::from_pairs([("Asset Tag", "A-1001"), ("Owner", "Facilities")]);
    let url = encode(BASE_URL, &record);
    assert_eq!(
        url,
        "https://qrid.example.com/Asset Tag=A-1001; Owner=Facilities"
    );

    let back = decode(url.strip_prefix(BASE_URL).unwrap());
    assert_eq!(back[0].0, "Asset Tag");
    assert_eq!(back[1].1, "Facilities");
}

#[test]
fn empty_sheet_yields_no_locators() {
    let grid = Grid::from_rows(vec![vec!["", ""], vec!["", ""]]);
    assert!(infer_header(&grid).is_none());
}

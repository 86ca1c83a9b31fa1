//! Row serialization as seen by a reader

use crate::common::parse_row;
use chrono::{DateTime, NaiveDate};
use pretty_assertions::assert_eq;
use sheetrow_core::{CellRef, CellValue};
use sheetrow_xlsx::{serialize_row, RowOptions, RowSerializer, SharedStrings};

#[test]
fn test_mixed_row() {
    let values = vec![
        CellValue::from("Widget <A>"),
        CellValue::from(3),
        CellValue::from(19.99),
        CellValue::from(true),
        CellValue::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        CellValue::Time(DateTime::parse_from_rfc3339("2024-01-15T06:00:00-08:00").unwrap()),
    ];

    let row = parse_row(&serialize_row(&values, 12, None, false).unwrap());
    assert_eq!(row.number, 12);

    let summary: Vec<_> = row
        .cells
        .iter()
        .map(|c| {
            (
                c.reference.as_str(),
                c.style.as_deref(),
                c.kind.as_deref(),
                c.value.as_str(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A12", None, Some("inlineStr"), "Widget <A>"),
            ("B12", None, Some("n"), "3"),
            ("C12", Some("3"), Some("n"), "19.99"),
            ("D12", None, Some("b"), "1"),
            ("E12", Some("1"), None, "45306"),
            ("F12", Some("2"), None, "45306.25"),
        ]
    );
}

#[test]
fn test_empty_string_keeps_following_reference() {
    let values: Vec<CellValue> = vec!["a".into(), "".into(), "c".into()];
    let row = parse_row(&serialize_row(&values, 1, None, false).unwrap());

    let refs: Vec<_> = row.cells.iter().map(|c| c.reference.as_str()).collect();
    assert_eq!(refs, vec!["A1", "C1"]);
}

#[test]
fn test_references_past_z() {
    let values: Vec<CellValue> = (0..60).map(CellValue::from).collect();
    let row = parse_row(&serialize_row(&values, 2, None, false).unwrap());

    assert_eq!(row.cells.len(), 60);
    assert_eq!(row.cells[25].reference, "Z2");
    assert_eq!(row.cells[26].reference, "AA2");
    assert_eq!(row.cells[52].reference, "BA2");

    // Every reference names the column it sits in
    for (i, cell) in row.cells.iter().enumerate() {
        assert_eq!(CellRef::parse(&cell.reference).unwrap(), CellRef::new(2, i as u32));
        assert_eq!(cell.value, i.to_string());
    }
}

#[test]
fn test_shared_strings_across_rows() {
    let mut table = SharedStrings::new();
    let serializer = RowSerializer::new(RowOptions::default().auto_format(true));

    let first = serializer
        .serialize_row(&["open".into(), "42".into(), "closed".into()], 1, Some(&mut table))
        .unwrap();
    let second = serializer
        .serialize_row(&["closed".into(), "open".into()], 2, Some(&mut table))
        .unwrap();

    let first = parse_row(&first);
    let second = parse_row(&second);

    // Numbers never go to the table
    assert_eq!(first.cells[1].kind.as_deref(), Some("n"));
    assert_eq!(table.len(), 2);

    assert_eq!(first.cells[0].value, second.cells[1].value);
    assert_eq!(first.cells[2].value, second.cells[0].value);

    let resolved: Vec<_> = second
        .cells
        .iter()
        .map(|c| table.get(c.value.parse().unwrap()).unwrap())
        .collect();
    assert_eq!(resolved, vec!["closed", "open"]);
}

#[test]
fn test_inline_text_roundtrip() {
    let tricky = "Tom & Jerry's \"<b>\" \u{1F600}\nline two";
    let row = parse_row(&serialize_row(&[tricky.into()], 1, None, false).unwrap());
    assert_eq!(row.cells[0].value, tricky);
}

#[test]
fn test_auto_format_flag() {
    let values: Vec<CellValue> = vec!["true".into(), "2024-01-15".into()];

    let off = parse_row(&serialize_row(&values, 1, None, false).unwrap());
    assert!(off.cells.iter().all(|c| c.kind.as_deref() == Some("inlineStr")));

    let on = parse_row(&serialize_row(&values, 1, None, true).unwrap());
    assert_eq!(on.cells[0].kind.as_deref(), Some("b"));
    assert_eq!(on.cells[1].style.as_deref(), Some("1"));
    assert_eq!(on.cells[1].value, "45306");
}

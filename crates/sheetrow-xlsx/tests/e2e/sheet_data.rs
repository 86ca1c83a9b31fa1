//! Streaming several rows into one `<sheetData>`

use crate::common::parse_rows;
use pretty_assertions::assert_eq;
use sheetrow_core::CellValue;
use sheetrow_xlsx::{RowOptions, SharedStrings, SheetDataWriter};

#[test]
fn test_many_rows() {
    let mut table = SharedStrings::new();
    let options = RowOptions::default().auto_format(true);
    let mut writer = SheetDataWriter::new(Vec::new(), options).unwrap();

    writer
        .write_row(&["name".into(), "qty".into()], Some(&mut table))
        .unwrap();
    for i in 0..100 {
        let values: Vec<CellValue> = vec![format!("item {}", i % 10).into(), i.to_string().into()];
        writer.write_row(&values, Some(&mut table)).unwrap();
    }
    let xml = String::from_utf8(writer.finish().unwrap()).unwrap();

    let rows = parse_rows(&xml);
    assert_eq!(rows.len(), 101);
    assert_eq!(rows[100].number, 101);
    assert_eq!(rows[100].cells[1].value, "99");

    // two header names + ten distinct item names
    assert_eq!(table.len(), 12);
    assert_eq!(table.count(), 102);
}

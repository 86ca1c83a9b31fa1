//! Property tests for numeric cells

use crate::common::parse_row;
use proptest::prelude::*;
use sheetrow_core::CellValue;
use sheetrow_xlsx::serialize_row;

proptest! {
    #[test]
    fn integers_roundtrip(n in any::<i64>()) {
        let row = parse_row(&serialize_row(&[CellValue::Integer(n)], 1, None, false).unwrap());
        prop_assert_eq!(row.cells[0].value.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn floats_roundtrip(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let row = parse_row(&serialize_row(&[CellValue::Float(n)], 1, None, false).unwrap());
        prop_assert_eq!(row.cells[0].value.parse::<f64>().unwrap(), n);
    }

    #[test]
    fn detected_integers_roundtrip(n in any::<i64>()) {
        let text = n.to_string();
        let row = parse_row(&serialize_row(&[CellValue::from(text)], 1, None, true).unwrap());
        prop_assert_eq!(row.cells[0].kind.as_deref(), Some("n"));
        prop_assert_eq!(row.cells[0].value.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn plain_text_is_untouched_without_auto_format(s in "[a-z0-9.:-]{1,12}") {
        let row = parse_row(&serialize_row(&[CellValue::from(s.clone())], 1, None, false).unwrap());
        prop_assert_eq!(row.cells[0].kind.as_deref(), Some("inlineStr"));
        prop_assert_eq!(&row.cells[0].value, &s);
    }
}

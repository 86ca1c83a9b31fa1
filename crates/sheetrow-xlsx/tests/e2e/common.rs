//! Common utilities for E2E tests.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A `<c>` element as read back from a serialized row
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCell {
    /// The `r` attribute (e.g. "B3")
    pub reference: String,
    /// The `s` attribute
    pub style: Option<String>,
    /// The `t` attribute
    pub kind: Option<String>,
    /// Unescaped text content (`<v>` or `<is><t>`)
    pub value: String,
}

/// A `<row>` element as read back from serialized XML
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub number: u32,
    pub cells: Vec<ParsedCell>,
}

/// Parse every `<row>` in `xml`, panicking if the XML is not well-formed.
pub fn parse_rows(xml: &str) -> Vec<ParsedRow> {
    let mut reader = Reader::from_str(xml);
    let mut rows = Vec::new();
    let mut current_cell: Option<ParsedCell> = None;

    loop {
        match reader.read_event().expect("serialized XML should be well-formed") {
            Event::Start(e) => match e.name().as_ref() {
                b"row" => rows.push(ParsedRow {
                    number: attr(&e, b"r")
                        .expect("row has an r attribute")
                        .parse()
                        .expect("row number is numeric"),
                    cells: Vec::new(),
                }),
                b"c" => {
                    current_cell = Some(ParsedCell {
                        reference: attr(&e, b"r").expect("cell has an r attribute"),
                        style: attr(&e, b"s"),
                        kind: attr(&e, b"t"),
                        value: String::new(),
                    })
                }
                _ => {}
            },
            Event::Text(t) => {
                if let Some(cell) = current_cell.as_mut() {
                    cell.value.push_str(&t.unescape().expect("valid escapes"));
                }
            }
            Event::End(e) if e.name().as_ref() == b"c" => {
                let cell = current_cell.take().expect("closing an open cell");
                rows.last_mut().expect("cell inside a row").cells.push(cell);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    rows
}

/// Parse a single serialized row.
pub fn parse_row(xml: &str) -> ParsedRow {
    let mut rows = parse_rows(xml);
    assert_eq!(rows.len(), 1, "expected exactly one row in {xml}");
    rows.remove(0)
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .map(|a| a.expect("valid attribute"))
        .find(|a| a.key.as_ref() == key)
        .map(|a| a.unescape_value().expect("valid escapes").into_owned())
}

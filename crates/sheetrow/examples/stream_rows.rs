//! Example: stream a few rows and the shared-string table to stdout

use sheetrow::prelude::*;
use sheetrow::NaiveDate;

fn main() -> Result<(), XlsxError> {
    let mut strings = SharedStrings::new();
    let stdout = std::io::stdout();

    let mut writer = SheetDataWriter::new(stdout.lock(), RowOptions::default().auto_format(true))?;
    writer.write_row(&["Product".into(), "Price".into(), "Listed".into()], Some(&mut strings))?;
    writer.write_row(
        &[
            "Widget".into(),
            19.99.into(),
            NaiveDate::from_ymd_opt(2024, 1, 15).into(),
        ],
        Some(&mut strings),
    )?;
    writer.write_row(&["Gadget".into(), "5".into(), "2024-02-01".into()], Some(&mut strings))?;
    writer.finish()?;

    println!();
    println!("{}", strings.to_xml()?);
    Ok(())
}

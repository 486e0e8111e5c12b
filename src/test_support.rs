use crate::data::clean::{clean, CleanOptions};
use crate::data::model::{CellValue, MovieTable, RawTable};

/// Upload with the required columns, one record per `(title, date, genre, vote, popularity)`.
pub fn raw_with_dates(records: &[(&str, &str, &str, f64, f64)]) -> RawTable {
    RawTable::new(
        ["Title", "Release_Date", "Genre", "Vote_Average", "Popularity"]
            .map(String::from)
            .to_vec(),
        records
            .iter()
            .map(|(title, date, genre, vote, popularity)| {
                vec![
                    CellValue::infer(title),
                    CellValue::infer(date),
                    CellValue::infer(genre),
                    CellValue::Float(*vote),
                    CellValue::Float(*popularity),
                ]
            })
            .collect(),
    )
}

/// Cleaned table, one record per `(title, date, genre, vote, popularity)`.
pub fn table_with_dates(records: &[(&str, &str, &str, f64, f64)]) -> MovieTable {
    clean(&raw_with_dates(records), &CleanOptions::default()).expect("required columns present")
}

/// Cleaned table, one record per `(title, genre, vote, popularity)`, all
/// released on 2020-01-01.
pub fn table_of(records: &[(&str, &str, f64, f64)]) -> MovieTable {
    let dated: Vec<_> = records
        .iter()
        .map(|(title, genre, vote, popularity)| (*title, "2020-01-01", *genre, *vote, *popularity))
        .collect();
    table_with_dates(&dated)
}

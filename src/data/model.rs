use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Columns every upload must carry, in the order they are reported.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Title",
    "Release_Date",
    "Genre",
    "Vote_Average",
    "Popularity",
];

/// Cell spellings read as missing.
const NA_VALUES: [&str; 8] = ["NA", "N/A", "#N/A", "NaN", "nan", "null", "NULL", "None"];

// ---------------------------------------------------------------------------
// CellValue – a single cell of the raw upload
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a CSV sniffer would infer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Guess the type of a textual cell. Empty text and the usual NA
    /// spellings are missing values. Non-canonical numeric text is kept
    /// verbatim; [`CellValue::as_f64`] still reads it as a number.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() || NA_VALUES.contains(&s) {
            return CellValue::Null;
        }
        // Numbers are only typed when they render back to the same text, so
        // "007" or "1e3" stay strings and keep their spelling.
        if let Ok(i) = s.parse::<i64>() {
            if i.to_string() == s {
                return CellValue::Integer(i);
            }
        } else if let Ok(f) = s.parse::<f64>() {
            if f.is_nan() {
                return CellValue::Null;
            }
            if f.to_string() == s {
                return CellValue::Float(f);
            }
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the cell as a number. Numeric text is accepted, NaN is not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            _ => None,
        }
    }

    /// Interpret the cell as text; `None` for missing values.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the upload as parsed, before cleaning
// ---------------------------------------------------------------------------

/// The upload exactly as parsed: header names plus one cell per column per row.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        RawTable { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Required columns absent from the header, in canonical order.
    pub fn missing_required(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|col| self.column_index(col).is_none())
            .map(|col| col.to_string())
            .collect()
    }

    /// Cell at (row, column); short rows read as missing.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Null)
    }

    /// First `n` rows rendered as text, every column.
    pub fn preview(&self, n: usize) -> Preview {
        let rows = self
            .rows
            .iter()
            .take(n)
            .map(|row| {
                (0..self.columns.len())
                    .map(|i| row.get(i).map(|c| c.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();
        Preview {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Head of the raw upload, ready to show as a table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Genre interning
// ---------------------------------------------------------------------------

/// Index of an interned genre name inside a [`GenreInterner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenreId(u32);

/// Finite set of genre names; rows hold a [`GenreId`] so equality filtering
/// compares integers instead of strings.
#[derive(Debug, Clone, Default)]
pub struct GenreInterner {
    names: Vec<String>,
    lookup: HashMap<String, GenreId>,
}

impl GenreInterner {
    pub fn intern(&mut self, name: &str) -> GenreId {
        if let Some(id) = self.lookup.get(name) {
            return *id;
        }
        let id = GenreId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<GenreId> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, id: GenreId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All genre names, sorted.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort();
        names
    }
}

// ---------------------------------------------------------------------------
// MovieRow / MovieTable – the cleaned, exploded working table
// ---------------------------------------------------------------------------

/// One exploded row: a record paired with exactly one of its genres.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    /// Index of the record in the raw upload this row came from.
    pub source_row: usize,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub genre: GenreId,
    pub vote_average: f64,
    pub popularity: f64,
}

/// Counters gathered while cleaning, surfaced in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningStats {
    pub raw_rows: usize,
    pub dropped_rows: usize,
    pub unparsed_dates: usize,
    pub exploded_rows: usize,
}

/// The cleaned table every analytic runs over.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    pub rows: Vec<MovieRow>,
    pub genres: GenreInterner,
    pub stats: CleaningStats,
}

impl MovieTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn genre_name(&self, row: &MovieRow) -> &str {
        self.genres.name(row.genre)
    }

    /// Output form of a row.
    pub fn summary(&self, row: &MovieRow) -> MovieSummary {
        MovieSummary {
            title: row.title.clone(),
            genre: self.genre_name(row).to_string(),
            release_year: row.release_year,
            vote_average: row.vote_average,
            popularity: row.popularity,
        }
    }
}

/// Row shape handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub title: String,
    pub genre: String,
    pub release_year: Option<i32>,
    pub vote_average: f64,
    pub popularity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_cell_types() {
        assert_eq!(CellValue::infer(""), CellValue::Null);
        assert_eq!(CellValue::infer("42"), CellValue::Integer(42));
        assert_eq!(CellValue::infer("7.5"), CellValue::Float(7.5));
        assert_eq!(CellValue::infer("NaN"), CellValue::Null);
        assert_eq!(
            CellValue::infer("Spider-Man"),
            CellValue::String("Spider-Man".into())
        );
    }

    #[test]
    fn numeric_titles_keep_their_text() {
        assert_eq!(CellValue::infer("1917").as_text().as_deref(), Some("1917"));
        assert_eq!(CellValue::infer("2.5").as_text().as_deref(), Some("2.5"));
        assert_eq!(CellValue::Null.as_text(), None);
    }

    #[test]
    fn non_canonical_numbers_stay_verbatim() {
        for text in ["007", "1e3", "8.10", "+5", "-0"] {
            let cell = CellValue::infer(text);
            assert_eq!(cell, CellValue::String(text.into()));
            assert_eq!(cell.to_string(), text);
        }
        assert_eq!(CellValue::infer("007").as_f64(), Some(7.0));
        assert_eq!(CellValue::infer("1e3").as_f64(), Some(1000.0));
    }

    #[test]
    fn preview_shows_source_text() {
        let table = RawTable::new(
            vec!["Title".into(), "Popularity".into()],
            vec![
                vec![CellValue::infer("007"), CellValue::infer("12.50")],
                vec![CellValue::infer("1e3"), CellValue::infer("3")],
            ],
        );
        let preview = table.preview(5);
        assert_eq!(preview.rows[0], vec!["007", "12.50"]);
        assert_eq!(preview.rows[1], vec!["1e3", "3"]);
    }

    #[test]
    fn missing_required_lists_only_absent_columns() {
        let table = RawTable::new(
            vec!["Title".into(), "Genre".into(), "Overview".into()],
            vec![],
        );
        assert_eq!(
            table.missing_required(),
            vec!["Release_Date", "Vote_Average", "Popularity"]
        );
    }

    #[test]
    fn interner_reuses_ids() {
        let mut genres = GenreInterner::default();
        let a = genres.intern("Drama");
        let b = genres.intern("Action");
        assert_eq!(genres.intern("Drama"), a);
        assert_ne!(a, b);
        assert_eq!(genres.len(), 2);
        assert_eq!(genres.sorted_names(), vec!["Action", "Drama"]);
        assert_eq!(genres.get("Horror"), None);
    }

    #[test]
    fn preview_pads_short_rows() {
        let table = RawTable::new(
            vec!["Title".into(), "Genre".into()],
            vec![
                vec![CellValue::String("A".into())],
                vec![CellValue::String("B".into()), CellValue::String("Drama".into())],
                vec![CellValue::String("C".into()), CellValue::Null],
            ],
        );
        let preview = table.preview(2);
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.rows[0], vec!["A".to_string(), String::new()]);
        assert_eq!(preview.rows[1], vec!["B".to_string(), "Drama".to_string()]);
    }
}

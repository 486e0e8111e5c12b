use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::error::LoadError;
use super::model::{CleaningStats, GenreInterner, MovieRow, MovieTable, RawTable};

/// Knobs for turning a raw upload into the working table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Separator between genre tokens in the Genre column.
    pub genre_separator: String,
    /// Token used when a record lists no genre at all.
    pub unknown_genre: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions {
            genre_separator: ", ".to_string(),
            unknown_genre: "Unknown".to_string(),
        }
    }
}

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a release date, `None` when nothing matches.
///
/// Accepts plain dates in common layouts, datetimes (time is discarded),
/// RFC 3339 timestamps, `YYYY-MM` and a bare four-digit year, which map to
/// the first day of the period.
pub fn parse_release_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = text.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// Split a Genre cell into tokens. Blank tokens are skipped; a missing or
/// blank cell yields the single unknown-genre token.
pub fn split_genres(genre: Option<&str>, opts: &CleanOptions) -> Vec<String> {
    let tokens: Vec<String> = genre
        .map(|g| {
            g.split(opts.genre_separator.as_str())
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if tokens.is_empty() {
        vec![opts.unknown_genre.clone()]
    } else {
        tokens
    }
}

/// Column positions of the required fields in a raw upload.
struct RequiredColumns {
    title: usize,
    release_date: usize,
    genre: usize,
    vote_average: usize,
    popularity: usize,
}

impl RequiredColumns {
    fn locate(raw: &RawTable) -> Result<Self, LoadError> {
        let missing = raw.missing_required();
        let (
            Some(title),
            Some(release_date),
            Some(genre),
            Some(vote_average),
            Some(popularity),
        ) = (
            raw.column_index("Title"),
            raw.column_index("Release_Date"),
            raw.column_index("Genre"),
            raw.column_index("Vote_Average"),
            raw.column_index("Popularity"),
        )
        else {
            return Err(LoadError::MissingColumns { missing });
        };
        Ok(RequiredColumns {
            title,
            release_date,
            genre,
            vote_average,
            popularity,
        })
    }
}

/// Check the header for the required columns without touching the rows.
pub fn validate(raw: &RawTable) -> Result<(), LoadError> {
    RequiredColumns::locate(raw).map(|_| ())
}

/// Build the working table from a raw upload.
///
/// Rows missing any required field (or whose numeric fields do not parse)
/// are dropped. Unparsable dates are kept as missing. Each surviving record
/// is exploded into one row per genre token.
pub fn clean(raw: &RawTable, opts: &CleanOptions) -> Result<MovieTable, LoadError> {
    let cols = RequiredColumns::locate(raw)?;

    let mut genres = GenreInterner::default();
    let mut rows = Vec::with_capacity(raw.len());
    let mut stats = CleaningStats {
        raw_rows: raw.len(),
        ..CleaningStats::default()
    };

    for source_row in 0..raw.len() {
        let title = raw.cell(source_row, cols.title).as_text();
        let date_text = raw.cell(source_row, cols.release_date).as_text();
        let genre_text = raw.cell(source_row, cols.genre).as_text();
        let vote_average = raw.cell(source_row, cols.vote_average).as_f64();
        let popularity = raw.cell(source_row, cols.popularity).as_f64();

        let (Some(title), Some(date_text), Some(genre_text), Some(vote_average), Some(popularity)) =
            (title, date_text, genre_text, vote_average, popularity)
        else {
            stats.dropped_rows += 1;
            continue;
        };

        let release_date = parse_release_date(&date_text);
        if release_date.is_none() {
            stats.unparsed_dates += 1;
        }
        let release_year = release_date.map(|d| d.year());

        for token in split_genres(Some(&genre_text), opts) {
            rows.push(MovieRow {
                source_row,
                title: title.clone(),
                release_date,
                release_year,
                genre: genres.intern(&token),
                vote_average,
                popularity,
            });
        }
    }

    stats.exploded_rows = rows.len();
    if stats.dropped_rows > 0 {
        log::debug!("Dropped {} incomplete rows", stats.dropped_rows);
    }
    if stats.unparsed_dates > 0 {
        log::debug!("{} release dates could not be parsed", stats.unparsed_dates);
    }

    Ok(MovieTable {
        rows,
        genres,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::CellValue;

    fn s(v: &str) -> CellValue {
        CellValue::infer(v)
    }

    fn movies(rows: Vec<[&str; 5]>) -> RawTable {
        RawTable::new(
            ["Title", "Release_Date", "Genre", "Vote_Average", "Popularity"]
                .map(String::from)
                .to_vec(),
            rows.into_iter()
                .map(|r| r.iter().map(|c| s(c)).collect())
                .collect(),
        )
    }

    #[test]
    fn date_layouts() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        assert_eq!(parse_release_date("2021-12-15"), d(2021, 12, 15));
        assert_eq!(parse_release_date("12/15/2021"), d(2021, 12, 15));
        assert_eq!(parse_release_date("2021-12-15 10:30:00"), d(2021, 12, 15));
        assert_eq!(parse_release_date("2021-12-15T10:30:00Z"), d(2021, 12, 15));
        assert_eq!(parse_release_date("2021-12"), d(2021, 12, 1));
        assert_eq!(parse_release_date("1999"), d(1999, 1, 1));
        assert_eq!(parse_release_date("December 15, 2021"), d(2021, 12, 15));
        assert_eq!(parse_release_date("soon"), None);
        assert_eq!(parse_release_date("2021-13-45"), None);
    }

    #[test]
    fn genre_tokens() {
        let opts = CleanOptions::default();
        assert_eq!(split_genres(Some("Action, Drama"), &opts), vec!["Action", "Drama"]);
        assert_eq!(split_genres(Some("Horror"), &opts), vec!["Horror"]);
        assert_eq!(split_genres(Some("Action, "), &opts), vec!["Action"]);
        assert_eq!(split_genres(None, &opts), vec!["Unknown"]);
        assert_eq!(split_genres(Some(" "), &opts), vec!["Unknown"]);
    }

    #[test]
    fn missing_columns_are_named() {
        let raw = RawTable::new(vec!["Title".into(), "Genre".into()], vec![]);
        match clean(&raw, &CleanOptions::default()) {
            Err(LoadError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["Release_Date", "Vote_Average", "Popularity"])
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
        assert!(validate(&raw).is_err());
    }

    #[test]
    fn drops_incomplete_rows_and_explodes_genres() {
        let raw = movies(vec![
            ["Spider-Man", "2021-12-15", "Action, Adventure, Science Fiction", "8.3", "5083.954"],
            ["", "2022-03-01", "Crime", "8.1", "3827.658"],
            ["No Votes", "2022-03-01", "Drama", "", "10"],
            ["Bad Date", "someday", "Comedy", "6.0", "12.5"],
            ["Text Vote", "2020-01-01", "Drama", "great", "1"],
        ]);
        let table = clean(&raw, &CleanOptions::default()).unwrap();

        assert_eq!(table.stats.raw_rows, 5);
        assert_eq!(table.stats.dropped_rows, 3);
        assert_eq!(table.stats.unparsed_dates, 1);
        assert_eq!(table.len(), 4);
        assert_eq!(table.stats.exploded_rows, 4);

        let spider: Vec<_> = table.rows.iter().filter(|r| r.source_row == 0).collect();
        assert_eq!(spider.len(), 3);
        let names: Vec<_> = spider.iter().map(|r| table.genre_name(r)).collect();
        assert_eq!(names, vec!["Action", "Adventure", "Science Fiction"]);
        for r in &spider {
            assert_eq!(r.title, "Spider-Man");
            assert_eq!(r.release_year, Some(2021));
            assert_eq!(r.vote_average, 8.3);
            assert_eq!(r.popularity, 5083.954);
        }

        let bad_date = table.rows.iter().find(|r| r.title == "Bad Date").unwrap();
        assert_eq!(bad_date.release_date, None);
        assert_eq!(bad_date.release_year, None);
    }

    #[test]
    fn custom_separator() {
        let raw = movies(vec![["A", "2020-01-01", "Action|Drama", "5", "1"]]);
        let opts = CleanOptions {
            genre_separator: "|".into(),
            ..CleanOptions::default()
        };
        let table = clean(&raw, &opts).unwrap();
        assert_eq!(table.genres.sorted_names(), vec!["Action", "Drama"]);
    }

    proptest! {
        #[test]
        fn explosion_yields_one_row_per_token(
            genre_lists in prop::collection::vec(
                prop::collection::vec("[A-Z][a-z]{2,8}", 1..5),
                1..20,
            ),
            votes in prop::collection::vec(0.0f64..10.0, 20),
        ) {
            let raw = RawTable::new(
                ["Title", "Release_Date", "Genre", "Vote_Average", "Popularity"]
                    .map(String::from)
                    .to_vec(),
                genre_lists
                    .iter()
                    .enumerate()
                    .map(|(i, genres)| vec![
                        CellValue::String(format!("Movie {i}")),
                        CellValue::String("2020-05-17".into()),
                        CellValue::String(genres.join(", ")),
                        CellValue::Float(votes[i]),
                        CellValue::Float(i as f64),
                    ])
                    .collect(),
            );
            let table = clean(&raw, &CleanOptions::default()).unwrap();

            let expected: usize = genre_lists.iter().map(Vec::len).sum();
            prop_assert_eq!(table.len(), expected);
            for (i, genres) in genre_lists.iter().enumerate() {
                let rows: Vec<_> = table.rows.iter().filter(|r| r.source_row == i).collect();
                prop_assert_eq!(rows.len(), genres.len());
                for (row, genre) in rows.iter().zip(genres) {
                    prop_assert_eq!(table.genre_name(row), genre.as_str());
                    prop_assert_eq!(&row.title, &format!("Movie {i}"));
                    prop_assert_eq!(row.vote_average, votes[i]);
                    prop_assert_eq!(row.popularity, i as f64);
                }
            }
        }

        #[test]
        fn cleaned_rows_are_fully_populated(
            cells in prop::collection::vec(
                prop::collection::vec(prop::option::of("[a-z0-9]{1,6}"), 5),
                0..30,
            ),
        ) {
            let raw = RawTable::new(
                ["Title", "Release_Date", "Genre", "Vote_Average", "Popularity"]
                    .map(String::from)
                    .to_vec(),
                cells
                    .iter()
                    .map(|row| row.iter().map(|c| match c {
                        Some(v) => CellValue::infer(v),
                        None => CellValue::Null,
                    }).collect())
                    .collect(),
            );
            let table = clean(&raw, &CleanOptions::default()).unwrap();
            for row in &table.rows {
                let source = &raw.rows[row.source_row];
                prop_assert!(source.iter().all(|c| !c.is_null()));
                prop_assert!(!row.vote_average.is_nan());
                prop_assert!(!row.popularity.is_nan());
            }
        }
    }
}

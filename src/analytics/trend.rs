use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::FilteredView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Rows per release year, oldest first. Rows without a year are skipped.
pub fn release_trend(view: &FilteredView<'_>) -> Vec<YearCount> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for year in view.rows().filter_map(|r| r.release_year) {
        *years.entry(year).or_default() += 1;
    }
    years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::GenreSelection;
    use crate::test_support::table_with_dates;

    #[test]
    fn counts_sorted_by_year_and_skips_missing() {
        let table = table_with_dates(&[
            ("A", "2021-05-01", "Drama", 5.0, 1.0),
            ("B", "1999-01-01", "Drama, Comedy", 5.0, 1.0),
            ("C", "2021-12-31", "Comedy", 5.0, 1.0),
            ("D", "not a date", "Drama", 5.0, 1.0),
        ]);
        let view = FilteredView::new(&table, &GenreSelection::All);
        let trend = release_trend(&view);
        assert_eq!(
            trend,
            vec![
                YearCount { year: 1999, count: 2 },
                YearCount { year: 2021, count: 2 },
            ]
        );

        let dated = view.rows().filter(|r| r.release_year.is_some()).count();
        assert_eq!(trend.iter().map(|y| y.count).sum::<usize>(), dated);
        assert_eq!(dated, view.len() - 1);
    }

    #[test]
    fn trend_follows_filter() {
        let table = table_with_dates(&[
            ("A", "2021-05-01", "Drama", 5.0, 1.0),
            ("B", "1999-01-01", "Comedy", 5.0, 1.0),
        ]);
        let view = FilteredView::new(&table, &GenreSelection::Genre("Comedy".into()));
        assert_eq!(release_trend(&view), vec![YearCount { year: 1999, count: 1 }]);
    }
}

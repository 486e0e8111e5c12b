use super::model::{MovieRow, MovieSummary, MovieTable};

/// Sentinel choice meaning "no genre filter".
pub const ALL_GENRES: &str = "All";

// ---------------------------------------------------------------------------
// Genre selection
// ---------------------------------------------------------------------------

/// Which slice of the exploded table the analytics look at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreSelection {
    #[default]
    All,
    Genre(String),
}

impl GenreSelection {
    /// Interpret a selector choice; [`ALL_GENRES`] maps to no filter.
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_GENRES {
            GenreSelection::All
        } else {
            GenreSelection::Genre(choice.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GenreSelection::All => ALL_GENRES,
            GenreSelection::Genre(g) => g,
        }
    }
}

/// Selector entries: the "All" sentinel followed by every genre, sorted.
pub fn genre_options(table: &MovieTable) -> Vec<String> {
    std::iter::once(ALL_GENRES.to_string())
        .chain(table.genres.sorted_names())
        .collect()
}

/// Return indices of rows that pass the genre selection.
///
/// A genre absent from the table selects nothing.
pub fn filtered_indices(table: &MovieTable, selection: &GenreSelection) -> Vec<usize> {
    match selection {
        GenreSelection::All => (0..table.len()).collect(),
        GenreSelection::Genre(name) => match table.genres.get(name) {
            Some(id) => table
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.genre == id)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        },
    }
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// The working table seen through a genre selection.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    pub table: &'a MovieTable,
    pub indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn new(table: &'a MovieTable, selection: &GenreSelection) -> Self {
        FilteredView {
            table,
            indices: filtered_indices(table, selection),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a MovieRow> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| &table.rows[i])
    }

    /// Output form of every row matching `pred`, in table order.
    pub fn summaries_where(&self, pred: impl Fn(&MovieRow) -> bool) -> Vec<MovieSummary> {
        self.rows()
            .filter(|row| pred(row))
            .map(|row| self.table.summary(row))
            .collect()
    }
}

use std::collections::HashMap;

use serde::Serialize;

use crate::data::model::{GenreId, MovieTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Exploded rows per genre over the whole table, most frequent first; ties
/// are ordered by name.
pub fn genre_frequency(table: &MovieTable) -> Vec<GenreCount> {
    let mut counts: HashMap<GenreId, usize> = HashMap::new();
    for row in &table.rows {
        *counts.entry(row.genre).or_default() += 1;
    }

    let mut frequency: Vec<GenreCount> = counts
        .into_iter()
        .map(|(id, count)| GenreCount {
            genre: table.genres.name(id).to_string(),
            count,
        })
        .collect();
    frequency.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    frequency
}

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Category – quartile position of a value
// ---------------------------------------------------------------------------

/// Quartile bucket a value falls into, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NotPopular,
    BelowAvg,
    Average,
    Popular,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::NotPopular,
        Category::BelowAvg,
        Category::Average,
        Category::Popular,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::NotPopular => "not_popular",
            Category::BelowAvg => "below_avg",
            Category::Average => "average",
            Category::Popular => "popular",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Quantiles
// ---------------------------------------------------------------------------

/// Quantile `q` of sorted values, interpolating linearly between the two
/// nearest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = q.clamp(0.0, 1.0) * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);
    let v = a + (b - a) * (pos - lo as f64);
    Some(v.max(a).min(b))
}

/// Bin edges `[min, Q1, Q2, Q3, max]` of a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuartileEdges {
    pub min: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub max: f64,
}

impl QuartileEdges {
    /// Edges over the finite values given; `None` when there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        Some(QuartileEdges {
            min: sorted[0],
            q1: quantile(&sorted, 0.25)?,
            q2: quantile(&sorted, 0.5)?,
            q3: quantile(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.q2, self.q3, self.max]
    }

    /// All edges collapsed onto one point.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Bucket for `value`. Bins are closed on the right and the lowest bin
    /// also includes the minimum. Coincident edges leave the bins between
    /// them empty. Values outside `[min, max]` have no bucket.
    pub fn categorize(&self, value: f64) -> Option<Category> {
        if value.is_nan() || value < self.min || value > self.max {
            return None;
        }
        let category = if value <= self.q1 {
            Category::NotPopular
        } else if value <= self.q2 {
            Category::BelowAvg
        } else if value <= self.q3 {
            Category::Average
        } else {
            Category::Popular
        };
        Some(category)
    }
}

/// Rows per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count values per bucket. All four buckets are reported, empty ones as 0.
pub fn category_counts(
    edges: Option<&QuartileEdges>,
    values: impl IntoIterator<Item = f64>,
) -> Vec<CategoryCount> {
    tally(
        values
            .into_iter()
            .map(|v| edges.and_then(|e| e.categorize(v))),
    )
}

/// Count per-row labels into all four buckets; unlabelled rows are skipped.
pub fn tally(labels: impl IntoIterator<Item = Option<Category>>) -> Vec<CategoryCount> {
    let mut counts = [0usize; 4];
    for category in labels.into_iter().flatten() {
        counts[category.index()] += 1;
    }
    Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: counts[category.index()],
        })
        .collect()
}

/// Quartile edges plus per-bucket counts of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub edges: Option<QuartileEdges>,
    pub counts: Vec<CategoryCount>,
}

impl CategoryBreakdown {
    pub fn from_values(values: &[f64]) -> Self {
        let edges = QuartileEdges::from_values(values.iter().copied());
        let counts = category_counts(edges.as_ref(), values.iter().copied());
        CategoryBreakdown { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn quantile_interpolates_between_ranks() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.0), Some(1.0));
        assert_eq!(quantile(&v, 0.25), Some(1.75));
        assert_eq!(quantile(&v, 0.5), Some(2.5));
        assert_eq!(quantile(&v, 0.75), Some(3.25));
        assert_eq!(quantile(&v, 1.0), Some(4.0));
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[7.0], 0.3), Some(7.0));
    }

    #[test]
    fn edges_ignore_input_order() {
        let edges = QuartileEdges::from_values([4.0, 1.0, 3.0, 2.0, 5.0]).unwrap();
        assert_eq!(edges.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(!edges.is_degenerate());
    }

    #[test]
    fn lowest_bin_includes_minimum_and_bins_close_right() {
        let edges = QuartileEdges::from_values([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(edges.categorize(1.0), Some(Category::NotPopular));
        assert_eq!(edges.categorize(2.0), Some(Category::NotPopular));
        assert_eq!(edges.categorize(2.5), Some(Category::BelowAvg));
        assert_eq!(edges.categorize(3.0), Some(Category::BelowAvg));
        assert_eq!(edges.categorize(4.0), Some(Category::Average));
        assert_eq!(edges.categorize(5.0), Some(Category::Popular));
        assert_eq!(edges.categorize(0.5), None);
        assert_eq!(edges.categorize(5.5), None);
    }

    #[test]
    fn degenerate_edges_put_everything_in_one_bin() {
        let values = [6.5; 7];
        let breakdown = CategoryBreakdown::from_values(&values);
        let edges = breakdown.edges.unwrap();
        assert!(edges.is_degenerate());
        assert_eq!(breakdown.counts[0].count, 7);
        assert_eq!(breakdown.total(), 7);
        assert!(breakdown.counts[1..].iter().all(|c| c.count == 0));
    }

    #[test]
    fn empty_input_reports_zero_counts() {
        let breakdown = CategoryBreakdown::from_values(&[]);
        assert!(breakdown.edges.is_none());
        assert_eq!(breakdown.counts.len(), 4);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["not_popular", "below_avg", "average", "popular"]);
        assert_eq!(
            serde_json::to_string(&Category::BelowAvg).unwrap(),
            "\"below_avg\""
        );
    }

    proptest! {
        #[test]
        fn edges_are_non_decreasing(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
            let edges = QuartileEdges::from_values(values.iter().copied()).unwrap();
            let e = edges.as_array();
            prop_assert!(e.windows(2).all(|w| w[0] <= w[1]), "{:?}", e);
        }

        #[test]
        fn every_value_lands_in_exactly_one_bin(
            values in prop::collection::vec(prop_oneof![0.0f64..10.0, Just(5.0)], 1..200),
        ) {
            let breakdown = CategoryBreakdown::from_values(&values);
            prop_assert_eq!(breakdown.total(), values.len());
            let edges = breakdown.edges.unwrap();
            for v in &values {
                prop_assert!(edges.categorize(*v).is_some());
            }
        }
    }
}

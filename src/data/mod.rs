/// Data layer: core types, loading, cleaning and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  bytes → RawTable (memoised by content hash in `cache`)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  validate, drop incomplete rows, parse dates, explode genres
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ MovieTable  │  Vec<MovieRow>, interned genres
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  genre selection → FilteredView
///   └──────────┘
/// ```

pub mod cache;
pub mod clean;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

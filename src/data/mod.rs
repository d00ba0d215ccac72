/// Data layer: loading, cleaning, filtering and summaries.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode (UTF-8, else windows-1252) → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  trim labels, rename legacy labels
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  project required columns, drop incomplete rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  country + elevation window → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  extremes, top-N, type breakdown, map markers, text
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod select;
pub mod summary;

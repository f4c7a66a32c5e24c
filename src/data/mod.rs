/// Data layer: launch table, loading, and the two derived views.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (validated, bounds cached)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │                         │
///        ▼                         ▼
///   ┌───────────┐            ┌──────────┐
///   │ aggregate  │ site →     │  filter   │ site + payload range →
///   │            │ counts     │           │ scatter points
///   └───────────┘            └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod series;

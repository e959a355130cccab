/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  energeetika.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  normalize headers, derive columns → EmissionsTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ EmissionsTable │  Vec<EmissionsRecord>, immutable after load
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year-range predicate → fresh filtered rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

/// Data layer: core types, loading, and the three evaluators.
///
/// Architecture:
/// ```text
///  .csv (any extension)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RowStore
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ RowStore  │  headers + Vec<Row>
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌──────────┐  ┌───────────┐  ┌──────────┐
///   │  filter   │  │ aggregate │  │   sort   │
///   └──────────┘  └───────────┘  └──────────┘
///    &Row subset     f64 scalar    &Row reorder
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

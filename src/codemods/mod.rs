pub mod imports;
pub mod indexed_fetch;
pub mod oracle;
pub mod registry;
pub mod row_check;
pub mod rowcount;
pub mod traits;

pub use indexed_fetch::IndexedFetchCodemod;
pub use registry::default_registry;
pub use row_check::RowCheckCodemod;
pub use rowcount::RowcountCodemod;

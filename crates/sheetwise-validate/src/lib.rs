pub mod dates;
pub mod registry;
pub mod rows;

pub use dates::{check_within_month, normalize};
pub use registry::SchemaRegistry;
pub use rows::{RowCheck, validate_row};

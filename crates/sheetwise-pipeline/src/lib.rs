pub mod ids;
pub mod process;

pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use process::{process_sheet, process_workbook};

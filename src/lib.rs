pub mod cli;
pub mod compare;
pub mod error;
pub mod loader;
pub mod output;
pub mod types;

pub use cli::Cli;
pub use compare::{
    Classification, Collision, CompareReport, JoinedRow, NewSlot, SideFields, classify,
    classify_collisions, classify_new, compare, filter_rows, join,
};
pub use error::{Error, Result};
pub use loader::parse_layout;
pub use output::{DisplayRecord, TableFormatter};
pub use types::{LayoutRow, LayoutTable, Slot};

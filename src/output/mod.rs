mod table;

pub use table::TableFormatter;

use crate::compare::{COLLISION_DISPLAY_COLUMNS, Collision, NEW_DISPLAY_COLUMNS, NewSlot};

/// A projected record relabeled to its display columns.
pub trait DisplayRecord {
    const COLUMNS: &'static [&'static str];

    /// Cell values, one per entry in [`DisplayRecord::COLUMNS`].
    fn cells(&self) -> Vec<String>;
}

impl DisplayRecord for NewSlot {
    const COLUMNS: &'static [&'static str] = &NEW_DISPLAY_COLUMNS;

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.type_name.clone(),
            self.slot.to_string(),
            self.offset.to_string(),
            self.bytes.to_string(),
        ]
    }
}

impl DisplayRecord for Collision {
    const COLUMNS: &'static [&'static str] = &COLLISION_DISPLAY_COLUMNS;

    fn cells(&self) -> Vec<String> {
        vec![
            self.local_name.clone(),
            self.local_type.clone(),
            self.slot.to_string(),
            self.offset.to_string(),
            self.local_bytes.to_string(),
            self.remote_name.clone(),
            self.remote_type.clone(),
            self.remote_bytes.to_string(),
        ]
    }
}

use serde::Serialize;
use std::fmt;

/// A storage slot index.
///
/// Slots are 256-bit words and namespaced storage places variables at hashed
/// slots, so the index is kept as a canonical unsigned decimal string (no
/// leading zeros) rather than narrowed to a machine integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    /// Parses an unsigned decimal slot index. Returns `None` for anything that
    /// is not made only of ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = s.trim_start_matches('0');
        if digits.is_empty() { Some(Self("0".to_string())) } else { Some(Self(digits.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Slot {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One declared storage variable at a fixed `(slot, offset)` position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRow {
    pub contract: String,
    pub name: String,
    pub type_name: String,
    pub slot: Slot,
    pub offset: u64,
    pub bytes: u64,
}

impl LayoutRow {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        slot: u64,
        offset: u64,
        bytes: u64,
    ) -> Self {
        Self {
            contract: String::new(),
            name: name.into(),
            type_name: type_name.into(),
            slot: Slot::from(slot),
            offset,
            bytes,
        }
    }

    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = contract.into();
        self
    }

    /// The physical position used to match rows across layouts.
    pub fn position(&self) -> (&Slot, u64) {
        (&self.slot, self.offset)
    }
}

/// Storage variables in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutTable {
    pub rows: Vec<LayoutRow>,
}

impl LayoutTable {
    pub fn new(rows: Vec<LayoutRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutRow> {
        self.rows.iter()
    }
}

impl From<Vec<LayoutRow>> for LayoutTable {
    fn from(rows: Vec<LayoutRow>) -> Self {
        Self::new(rows)
    }
}

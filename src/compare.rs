use crate::types::{LayoutRow, LayoutTable, Slot};
use serde::Serialize;
use std::collections::HashMap;

/// Display names for the new-or-shifted projection, in column order.
pub const NEW_DISPLAY_COLUMNS: [&str; 5] = ["Name", "Type", "Slot", "Offset", "Bytes"];

/// Display names for the collision projection, in column order.
pub const COLLISION_DISPLAY_COLUMNS: [&str; 8] = [
    "Local Name",
    "Local Type",
    "Slot",
    "Offset",
    "Local Bytes",
    "Remote Name",
    "Remote Type",
    "Remote Bytes",
];

/// Fields that exist on both sides of the join and therefore carry a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideFields {
    pub contract: String,
    pub name: String,
    pub type_name: String,
    pub bytes: u64,
}

impl From<&LayoutRow> for SideFields {
    fn from(row: &LayoutRow) -> Self {
        Self {
            contract: row.contract.clone(),
            name: row.name.clone(),
            type_name: row.type_name.clone(),
            bytes: row.bytes,
        }
    }
}

/// A local row paired with at most one remote row at the same `(slot, offset)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedRow {
    pub slot: Slot,
    pub offset: u64,
    pub local: SideFields,
    /// `None` when no remote row occupies this position.
    pub remote: Option<SideFields>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No remote row at this position: brand-new storage or a shifted variable.
    NewOrShifted,
    /// Both sides occupy the position with different declared types.
    Collision,
    Unchanged,
}

/// A local slot with no remote counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSlot {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Slot")]
    pub slot: Slot,
    #[serde(rename = "Offset")]
    pub offset: u64,
    #[serde(rename = "Bytes")]
    pub bytes: u64,
}

/// A position declared on both sides with differing types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    #[serde(rename = "Local Name")]
    pub local_name: String,
    #[serde(rename = "Local Type")]
    pub local_type: String,
    #[serde(rename = "Slot")]
    pub slot: Slot,
    #[serde(rename = "Offset")]
    pub offset: u64,
    #[serde(rename = "Local Bytes")]
    pub local_bytes: u64,
    #[serde(rename = "Remote Name")]
    pub remote_name: String,
    #[serde(rename = "Remote Type")]
    pub remote_type: String,
    #[serde(rename = "Remote Bytes")]
    pub remote_bytes: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompareReport {
    pub new_or_shifted: Vec<NewSlot>,
    pub collisions: Vec<Collision>,
}

/// Left-join `local` against `remote` on `(slot, offset)`.
///
/// Local order is preserved. A local row matching several remote rows yields
/// one joined row per match, consecutively and in remote order; a local row
/// with no match yields a single row with `remote: None`.
pub fn join(local: &LayoutTable, remote: &LayoutTable) -> Vec<JoinedRow> {
    let mut by_position: HashMap<(&Slot, u64), Vec<&LayoutRow>> = HashMap::new();
    for row in remote.iter() {
        by_position.entry(row.position()).or_default().push(row);
    }

    let mut joined = Vec::with_capacity(local.len());
    for row in local.iter() {
        let local_fields = SideFields::from(row);
        match by_position.get(&row.position()) {
            Some(matches) => {
                for remote_row in matches {
                    joined.push(JoinedRow {
                        slot: row.slot.clone(),
                        offset: row.offset,
                        local: local_fields.clone(),
                        remote: Some(SideFields::from(*remote_row)),
                    });
                }
            }
            None => joined.push(JoinedRow {
                slot: row.slot.clone(),
                offset: row.offset,
                local: local_fields,
                remote: None,
            }),
        }
    }

    log::debug!(
        "joined {} local row(s) against {} remote row(s) into {} row(s)",
        local.len(),
        remote.len(),
        joined.len()
    );
    joined
}

pub fn classify(row: &JoinedRow) -> Classification {
    match &row.remote {
        None => Classification::NewOrShifted,
        Some(remote) if remote.type_name != row.local.type_name => Classification::Collision,
        Some(_) => Classification::Unchanged,
    }
}

/// Select the joined rows matching `predicate`, keeping their order.
pub fn filter_rows<'a, F>(rows: &'a [JoinedRow], predicate: F) -> Vec<&'a JoinedRow>
where
    F: Fn(&JoinedRow) -> bool,
{
    rows.iter().filter(|row| predicate(*row)).collect()
}

impl NewSlot {
    pub fn project(row: &JoinedRow) -> Self {
        Self {
            name: row.local.name.clone(),
            type_name: row.local.type_name.clone(),
            slot: row.slot.clone(),
            offset: row.offset,
            bytes: row.local.bytes,
        }
    }
}

impl Collision {
    /// Returns `None` for a row without a remote side.
    pub fn project(row: &JoinedRow) -> Option<Self> {
        let remote = row.remote.as_ref()?;
        Some(Self {
            local_name: row.local.name.clone(),
            local_type: row.local.type_name.clone(),
            slot: row.slot.clone(),
            offset: row.offset,
            local_bytes: row.local.bytes,
            remote_name: remote.name.clone(),
            remote_type: remote.type_name.clone(),
            remote_bytes: remote.bytes,
        })
    }
}

/// Local positions that no remote row occupies. New and shifted variables are
/// indistinguishable here and land in the same list.
pub fn classify_new(joined: &[JoinedRow]) -> Vec<NewSlot> {
    filter_rows(joined, |row| row.remote.is_none()).into_iter().map(NewSlot::project).collect()
}

/// Positions occupied on both sides by different declared types. Types are
/// compared as plain strings.
pub fn classify_collisions(joined: &[JoinedRow]) -> Vec<Collision> {
    filter_rows(joined, |row| classify(row) == Classification::Collision)
        .into_iter()
        .filter_map(Collision::project)
        .collect()
}

/// Join both layouts and classify the result.
pub fn compare(local: &LayoutTable, remote: &LayoutTable) -> CompareReport {
    let joined = join(local, remote);
    CompareReport {
        new_or_shifted: classify_new(&joined),
        collisions: classify_collisions(&joined),
    }
}

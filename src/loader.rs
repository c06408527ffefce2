use crate::error::{Error, Result};
use crate::types::{LayoutRow, LayoutTable, Slot};
use indexmap::IndexMap;
use std::path::Path;

const FIELD_SEPARATOR: char = '|';

/// Header prefix of synthetic index columns.
const UNNAMED_PREFIX: &str = "Unnamed";

/// Positions of the required columns within a report row.
struct ColumnIndex {
    contract: usize,
    name: usize,
    type_name: usize,
    slot: usize,
    offset: usize,
    bytes: usize,
}

impl LayoutTable {
    /// Load a storage layout report as printed by `forge inspect <contract> storage`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        parse_layout(&text)
    }
}

/// Parse a `|`-delimited storage layout report.
///
/// The first non-blank line is the header. Columns with an empty or `Unnamed`
/// header (the leading and trailing `|` of the pretty table) are dropped, as is
/// the first data row, which is the `|---|` rule under the header.
pub fn parse_layout(text: &str) -> Result<LayoutTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(Error::MissingHeader)?;
    let header: Vec<String> = header_line
        .split(FIELD_SEPARATOR)
        .map(|name| name.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();

    let mut columns: IndexMap<&str, usize> = IndexMap::new();
    for (position, name) in header.iter().enumerate() {
        if is_unnamed(name) {
            continue;
        }
        columns.entry(name.as_str()).or_insert(position);
    }
    log::debug!(
        "layout header has {} named column(s), {} dropped",
        columns.len(),
        header.len() - columns.len()
    );

    let index = ColumnIndex::resolve(&columns)?;

    let mut rows = Vec::new();
    for (line, text) in lines.skip(1) {
        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != header.len() {
            return Err(Error::MalformedRow { line, expected: header.len(), found: fields.len() });
        }
        rows.push(index.row(&fields, line)?);
    }

    if rows.is_empty() {
        return Err(Error::EmptyLayout);
    }

    log::debug!("parsed {} storage layout row(s)", rows.len());
    Ok(LayoutTable::new(rows))
}

fn is_unnamed(name: &str) -> bool {
    name.is_empty() || name.starts_with(UNNAMED_PREFIX)
}

impl ColumnIndex {
    fn resolve(columns: &IndexMap<&str, usize>) -> Result<Self> {
        let find =
            |name: &'static str| columns.get(name).copied().ok_or(Error::MissingColumn(name));

        Ok(Self {
            contract: find("Contract")?,
            name: find("Name")?,
            type_name: find("Type")?,
            slot: find("Slot")?,
            offset: find("Offset")?,
            bytes: find("Bytes")?,
        })
    }

    fn row(&self, fields: &[&str], line: usize) -> Result<LayoutRow> {
        let slot_field = fields[self.slot];
        let slot = Slot::parse(slot_field).ok_or_else(|| Error::InvalidField {
            line,
            column: "Slot",
            value: slot_field.to_string(),
        })?;

        Ok(LayoutRow {
            contract: fields[self.contract].to_string(),
            name: fields[self.name].to_string(),
            type_name: fields[self.type_name].to_string(),
            slot,
            offset: parse_integer(fields[self.offset], "Offset", line)?,
            bytes: parse_integer(fields[self.bytes], "Bytes", line)?,
        })
    }
}

fn parse_integer(value: &str, column: &'static str, line: usize) -> Result<u64> {
    value.parse().map_err(|_| Error::InvalidField { line, column, value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORGE_REPORT: &str = "\
| Contract            | Name    | Type                        | Slot | Offset | Bytes |
|---------------------|---------|-----------------------------|------|--------|-------|
| src/Vault.sol:Vault | owner   | address                     | 0    | 0      | 20    |
| src/Vault.sol:Vault | paused  | bool                        | 0    | 20     | 1     |
| src/Vault.sol:Vault | balance | mapping(address => uint256) | 1    | 0      | 32    |
";

    #[test]
    fn parses_forge_pretty_table() {
        let table = parse_layout(FORGE_REPORT).expect("valid report");

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rows[0],
            LayoutRow::new("owner", "address", 0, 0, 20).with_contract("src/Vault.sol:Vault")
        );
        assert_eq!(table.rows[1].offset, 20);
        assert_eq!(table.rows[2].type_name, "mapping(address => uint256)");
        assert_eq!(table.rows[2].slot, Slot::from(1u64));
    }

    #[test]
    fn header_whitespace_is_removed_entirely() {
        let report = "Con tract|Na me|Type|Slot|Off set|Bytes\n---\nA|x|uint256|0|0|32\n";
        let table = parse_layout(report).expect("valid report");
        assert_eq!(table.rows[0].name, "x");
        assert_eq!(table.rows[0].contract, "A");
    }

    #[test]
    fn first_data_row_is_dropped_whatever_it_holds() {
        let report = "Contract|Name|Type|Slot|Offset|Bytes\n\
                      A|dropped|uint256|0|0|32\n\
                      A|kept|uint256|1|0|32\n";
        let table = parse_layout(report).expect("valid report");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].name, "kept");
    }

    #[test]
    fn unnamed_index_columns_are_dropped() {
        let report = "Unnamed: 0|Contract|Name|Type|Slot|Offset|Bytes\n\
                      -|-|-|-|-|-|-\n\
                      7|A|x|uint8|3|1|1\n";
        let table = parse_layout(report).expect("valid report");
        assert_eq!(table.rows[0], LayoutRow::new("x", "uint8", 3, 1, 1).with_contract("A"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let report = format!("\n\n{}\n\n", FORGE_REPORT);
        let table = parse_layout(&report).expect("valid report");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let report = "| Name | Type | Slot | Offset | Bytes | Contract |\n\
                      |------|------|------|--------|-------|----------|\n\
                      | x    | bool | 2    | 0      | 1     | A        |\n";
        let table = parse_layout(report).expect("valid report");
        assert_eq!(table.rows[0], LayoutRow::new("x", "bool", 2, 0, 1).with_contract("A"));
    }

    #[test]
    fn header_only_report_is_empty() {
        let report = "| Contract | Name | Type | Slot | Offset | Bytes |\n\
                      |----------|------|------|------|--------|-------|\n";
        assert!(matches!(parse_layout(report), Err(Error::EmptyLayout)));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(parse_layout(""), Err(Error::MissingHeader)));
        assert!(matches!(parse_layout("  \n\n"), Err(Error::MissingHeader)));
    }

    #[test]
    fn missing_column_is_reported() {
        let report = "| Name | Type | Slot | Offset | Bytes |\n\
                      |------|------|------|--------|-------|\n\
                      | x    | bool | 0    | 0      | 1     |\n";
        assert!(matches!(parse_layout(report), Err(Error::MissingColumn("Contract"))));
    }

    #[test]
    fn short_row_is_malformed() {
        let report = "| Contract | Name | Type | Slot | Offset | Bytes |\n\
                      |----------|------|------|------|--------|-------|\n\
                      | A        | x    | bool | 0    |\n";
        match parse_layout(report) {
            Err(Error::MalformedRow { line, expected, found }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 8);
                assert_eq!(found, 6);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_slot_is_invalid() {
        let report = "| Contract | Name | Type | Slot | Offset | Bytes |\n\
                      |----------|------|------|------|--------|-------|\n\
                      | A        | x    | bool | 0x1  | 0      | 1     |\n";
        match parse_layout(report) {
            Err(Error::InvalidField { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "Slot");
                assert_eq!(value, "0x1");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn trailing_rule_line_is_rejected() {
        let report = "| Contract | Name | Type    | Slot | Offset | Bytes |\n\
                      |----------|------|---------|------|--------|-------|\n\
                      | A        | x    | uint256 | 0    | 0      | 32    |\n\
                      |----------|------|---------|------|--------|-------|\n";
        match parse_layout(report) {
            Err(Error::InvalidField { line, column, value }) => {
                assert_eq!(line, 4);
                assert_eq!(column, "Slot");
                assert_eq!(value, "------");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_bytes_is_invalid() {
        let report = "Contract|Name|Type|Slot|Offset|Bytes\n-|-|-|-|-|-\nA|x|bool|0|0|one\n";
        assert!(matches!(
            parse_layout(report),
            Err(Error::InvalidField { column: "Bytes", .. })
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("layout.txt");
        std::fs::write(&path, FORGE_REPORT).expect("write report");

        let table = LayoutTable::load(&path).expect("load report");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = LayoutTable::load(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

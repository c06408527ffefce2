use crate::compare::CompareReport;
use crate::output::DisplayRecord;
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

const NEW_TITLE: &str = "New or shifted storage slots:";
const NEW_NONE: &str = "No new or shifted storage slots";
const COLLISION_TITLE: &str = "Potential storage collisions:";
const COLLISION_NONE: &str = "No potential storage collisions";

pub struct TableFormatter {
    no_color: bool,
}

impl TableFormatter {
    pub fn new(no_color: bool) -> Self {
        Self { no_color }
    }

    /// Render new/shifted slots, then collisions. An empty section collapses
    /// to a single sentence.
    pub fn format(&self, report: &CompareReport) -> String {
        let mut output = self.format_section(&report.new_or_shifted, NEW_TITLE, NEW_NONE, false);
        output.push_str(&self.format_section(
            &report.collisions,
            COLLISION_TITLE,
            COLLISION_NONE,
            true,
        ));
        output
    }

    fn format_section<R: DisplayRecord>(
        &self,
        records: &[R],
        title: &str,
        none_found: &str,
        alert: bool,
    ) -> String {
        if records.is_empty() {
            return format!("{}\n", none_found);
        }

        let heading = match (self.no_color, alert) {
            (true, _) => title.to_string(),
            (false, true) => title.red().bold().to_string(),
            (false, false) => title.bold().to_string(),
        };

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(R::COLUMNS.to_vec());
        for record in records {
            table.add_row(record.cells());
        }

        format!("\n{}\n{}\n", heading, table)
    }
}

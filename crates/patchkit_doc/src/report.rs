//! Build report model for one generator run.

use std::fmt;

/// One worksheet produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetBuilt {
    /// Worksheet name as written into the workbook.
    pub sheet_name: String,
    /// Final row cursor after the builder returned (rows used by the sheet).
    pub n_rows_written: u32,
}

/// Aggregate summary for one `build_workbook` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocBuild {
    /// Per-sheet results, in workbook order.
    pub sheets: Vec<SpecSheetBuilt>,
}

impl ReportDocBuild {
    /// Number of worksheets produced.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Total rows written across all worksheets.
    pub fn rows_total(&self) -> u64 {
        self.sheets
            .iter()
            .map(|sheet| u64::from(sheet.n_rows_written))
            .sum()
    }

    /// Record one built sheet.
    pub fn add_sheet(&mut self, sheet_name: impl Into<String>, n_rows_written: u32) {
        self.sheets.push(SpecSheetBuilt {
            sheet_name: sheet_name.into(),
            n_rows_written,
        });
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheets={} rows={}",
            self.sheet_count(),
            self.rows_total()
        )
    }
}

impl fmt::Display for ReportDocBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[DOC]"))
    }
}

#[cfg(test)]
mod tests {
    use super::ReportDocBuild;

    #[test]
    fn report_counts_and_format() {
        let mut report = ReportDocBuild::default();
        report.add_sheet("Executive Summary", 21);
        report.add_sheet("RACI Matrix", 16);

        assert_eq!(report.sheet_count(), 2);
        assert_eq!(report.rows_total(), 37);

        let txt = report.format("[DOC]");
        assert_eq!(txt, "[DOC] sheets=2 rows=37");
        assert_eq!(report.to_string(), txt);
    }
}

//! "Templates & Checklists" sheet: the entry/exit criteria checklist with a
//! blank status column to be filled per change.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_table_header, write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_CHECKLIST_HEADERS: [&str; 3] = ["Phase", "Checklist Item", "Status"];

const L_CHECKLIST: [[&str; 3]; 15] = [
    ["Pre-DEV", "Change request created and assigned", ""],
    ["Pre-DEV", "Patch package validated by development team", ""],
    ["Pre-DEV", "Backup verified and documented", ""],
    ["Pre-TEST", "DEV deployment successful", ""],
    ["Pre-TEST", "Test cases updated for new functionality", ""],
    ["Pre-TEST", "Regression test suite ready", ""],
    ["Pre-PROD", "TEST execution results approved", ""],
    ["Pre-PROD", "Regression test pass rate \u{2265}95%", ""],
    ["Pre-PROD", "UAT sign-off obtained", ""],
    ["Pre-PROD", "CAB approval obtained", ""],
    ["Pre-PROD", "Rollback plan documented and tested", ""],
    ["Post-PROD", "Post-deployment smoke tests pass", ""],
    ["Post-PROD", "Monitoring alerts confirmed operational", ""],
    ["Post-PROD", "Database integrity confirmed", ""],
    ["Post-PROD", "Business stakeholders notified", ""],
];

const L_COL_WIDTHS: [f64; 3] = [15.0, 50.0, 12.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "Templates & Checklists", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Entry/Exit Criteria Checklist", n_row)?;
    n_row = write_table_header(ws, styles, &L_CHECKLIST_HEADERS, n_row)?;
    for l_item in L_CHECKLIST {
        n_row = write_table_row(ws, styles, &l_item, n_row, EnumCellTextMode::Plain)?;
    }

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

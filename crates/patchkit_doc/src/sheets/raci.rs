//! "RACI Matrix" sheet: responsibility assignment for every patch activity.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_legend_band, write_table_header, write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_RACI_HEADERS: [&str; 7] = [
    "Activity",
    "IT Ops",
    "Development",
    "QA",
    "Security",
    "CAB",
    "Business",
];

const L_RACI_ROWS: [[&str; 7]; 11] = [
    ["Patch source identification", "R", "C", "I", "R", "I", "-"],
    ["Patch testing in DEV", "C", "R", "C", "I", "-", "-"],
    ["Change request creation", "R", "C", "C", "C", "I", "I"],
    ["TEST environment deployment", "R", "C", "C", "I", "-", "-"],
    ["Regression test execution", "C", "C", "R", "I", "-", "-"],
    ["UAT coordination", "I", "C", "R", "I", "I", "R"],
    ["CAB approval", "I", "C", "C", "C", "R", "I"],
    ["PROD deployment execution", "R", "C", "I", "C", "I", "-"],
    ["Post-deployment validation", "R", "C", "C", "C", "-", "-"],
    ["Post-implementation review", "R", "C", "C", "C", "C", "I"],
    ["Rollback execution", "R", "C", "-", "C", "I", "-"],
];

const TXT_LEGEND: &str = "Legend: R=Responsible, A=Accountable, C=Consulted, I=Informed";

const L_COL_WIDTHS: [f64; 7] = [30.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "RACI Matrix for Patch Activities", row)?;
    n_row += 1;

    n_row = write_table_header(ws, styles, &L_RACI_HEADERS, n_row)?;
    for l_activity in L_RACI_ROWS {
        n_row = write_table_row(ws, styles, &l_activity, n_row, EnumCellTextMode::Center)?;
    }
    n_row += 1;

    n_row = write_legend_band(ws, styles, TXT_LEGEND, n_row, L_RACI_HEADERS.len() as u16)?;

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

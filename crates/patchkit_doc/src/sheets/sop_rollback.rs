//! "SOP - Rollback" sheet: rollback triggers, decision authority, and the
//! production rollback procedure.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_label_row, write_step_rows, write_table_header,
    write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_TRIGGER_HEADERS: [&str; 3] = ["Trigger", "Threshold", "Action"];

const L_TRIGGERS: [[&str; 3]; 6] = [
    ["Service Availability", "<99.5%", "Immediate rollback"],
    ["Critical Defects", "\u{2265}5% users affected", "Immediate rollback"],
    ["Data Integrity", "Any confirmed issue", "Immediate rollback"],
    [
        "Security Vulnerability",
        "CVSS \u{2265}7.0 discovered",
        "Fast-track rollback",
    ],
    ["Smoke Test Failure", "Any failure in PROD", "Evaluate + decide"],
    ["Performance Degradation", ">20% slower", "Evaluate impact"],
];

const L_DECISION_AUTHORITY: [(&str, &str); 3] = [
    ("DEV", "Lead Developer"),
    ("TEST", "Test Manager + Development Lead (joint)"),
    ("PROD", "CAB Chair + IT Operations Manager (joint)"),
];

const L_ROLLBACK_STEPS: [&str; 8] = [
    "1. Confirm rollback decision - Obtain required approvals (CAB Chair + IT Ops Manager)",
    "2. Send rollback notification",
    "3. Enter maintenance mode",
    "4. Stop production services",
    "5. Restore production backup",
    "6. Start production services",
    "7. Verify rollback success",
    "8. Send rollback completion notification",
];

const L_COL_WIDTHS: [f64; 2] = [25.0, 50.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "SOP - Rollback Procedures", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Decision Triggers (When to Rollback)", n_row)?;
    n_row = write_table_header(ws, styles, &L_TRIGGER_HEADERS, n_row)?;
    for l_trigger in L_TRIGGERS {
        n_row = write_table_row(ws, styles, &l_trigger, n_row, EnumCellTextMode::Plain)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Rollback Decision Authority", n_row)?;
    for (c_env, c_authority) in L_DECISION_AUTHORITY {
        n_row = write_label_row(ws, styles, c_env, c_authority, n_row, false)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Rollback Procedure Summary", n_row)?;
    n_row = write_step_rows(ws, styles, &L_ROLLBACK_STEPS, n_row)?;

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

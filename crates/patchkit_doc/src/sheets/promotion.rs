//! "Patch Promotion Flow" sheet: entry/exit criteria and rollback strategy
//! per environment.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_label_row, write_table_header, write_table_row,
    write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_ENTRY_CRITERIA: [(&str, &str); 3] = [
    (
        "DEV",
        "Patch package validated by development team; change request created; backup verified",
    ),
    (
        "TEST",
        "DEV deployment successful; test cases updated; test data prepared; test environment \
         availability confirmed",
    ),
    (
        "PROD",
        "TEST execution results approved; CAB approval obtained; rollback plan documented; \
         communication plan initiated",
    ),
];

const L_EXIT_CRITERIA: [(&str, &str); 3] = [
    (
        "DEV",
        "Unit tests pass (\u{2265}90% coverage); basic integration smoke tests pass; no blocking \
         defects",
    ),
    (
        "TEST",
        "All blocking/critical defects resolved; regression test suite pass rate \u{2265}95%; UAT \
         sign-off obtained; performance benchmarks met",
    ),
    (
        "PROD",
        "Post-deployment smoke tests pass; monitoring alerts confirmed; business stakeholders \
         notified; documentation updated",
    ),
];

const L_ROLLBACK_HEADERS: [&str; 4] = [
    "Environment",
    "Rollback Trigger",
    "Rollback Procedure",
    "Max Downtime Tolerance",
];

const L_ROLLBACK_STRATEGY: [[&str; 4]; 3] = [
    [
        "DEV",
        "Any deployment failure",
        "Redeploy previous baseline from version control",
        "1 hour",
    ],
    [
        "TEST",
        "Critical defects discovered",
        "Restore from TEST backup; redeploy previous version",
        "4 hours",
    ],
    [
        "PROD",
        "Service availability <99.5%; data integrity issues; critical defect affecting >=5% of \
         users",
        "Execute documented backout plan; engage on-call DBA if needed",
        "Per SLA (15-30 min)",
    ],
];

const L_COL_WIDTHS: [f64; 4] = [15.0, 40.0, 40.0, 25.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "Patch Promotion Flow & Criteria", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Entry Criteria per Environment", n_row)?;
    n_row = write_table_header(ws, styles, &["Environment", "Entry Criteria"], n_row)?;
    for (c_env, c_criteria) in L_ENTRY_CRITERIA {
        n_row = write_label_row(ws, styles, c_env, c_criteria, n_row, true)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Exit Criteria per Environment", n_row)?;
    n_row = write_table_header(ws, styles, &["Environment", "Exit Criteria"], n_row)?;
    for (c_env, c_criteria) in L_EXIT_CRITERIA {
        n_row = write_label_row(ws, styles, c_env, c_criteria, n_row, true)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Rollback Strategy per Environment", n_row)?;
    n_row = write_table_header(ws, styles, &L_ROLLBACK_HEADERS, n_row)?;
    for l_rollback in L_ROLLBACK_STRATEGY {
        n_row = write_table_row(ws, styles, &l_rollback, n_row, EnumCellTextMode::Wrap)?;
    }

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

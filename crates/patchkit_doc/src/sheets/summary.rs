//! "Executive Summary" sheet: document metadata, strategy overview,
//! assumptions, and the deployment sequence table.

use patchkit_io_xlsx::conf::N_NCOLS_BAND;
use patchkit_io_xlsx::layout::{
    set_column_widths, write_bullet_band, write_field_row, write_header_band, write_note_band,
    write_table_header, write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const TXT_OVERVIEW: &str = "This document establishes the enterprise patch management strategy \
for a three-environment system (DEV, TEST, PROD). It defines the governance framework, \
operational procedures, risk mitigation controls, and decision criteria required to maintain \
system security, stability, and compliance while enabling efficient delivery of patches across \
environments.";

const L_ASSUMPTIONS: [&str; 6] = [
    "DEV, TEST, and PROD environments are logically and physically separated",
    "Change Management Board (CAB) exists with authority to approve/prohibit changes",
    "Production changes follow a formal Change Advisory Board (CAB) process",
    "Automated deployment tooling is available (e.g., CI/CD pipelines)",
    "Backup and recovery procedures are established for all environments",
    "The organization has defined SLAs for system availability",
];

const L_DEPLOY_SEQ_HEADERS: [&str; 4] = ["Sequence", "Environment", "Purpose", "Typical Lead Time"];

const L_DEPLOY_SEQ: [[&str; 4]; 3] = [
    ["1", "DEV", "Initial validation, development testing", "Day 0"],
    ["2", "TEST / STAGING", "Full regression, UAT", "Day 1-3"],
    ["3", "PROD", "Production release", "Day 5-7"],
];

const L_COL_WIDTHS: [f64; 4] = [15.0, 20.0, 35.0, 20.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(
        ws,
        styles,
        "Patch Management Strategy - Executive Summary",
        row,
    )?;

    n_row = write_field_row(ws, "Document Version:", "1.0", n_row)?;
    n_row = write_field_row(ws, "Effective Date:", "February 2026", n_row)?;
    n_row = write_field_row(
        ws,
        "Document Owner:",
        "Enterprise Architecture / IT Operations",
        n_row,
    )?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Strategy Overview", n_row)?;
    n_row = write_note_band(ws, styles, TXT_OVERVIEW, n_row, N_NCOLS_BAND)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Key Assumptions", n_row)?;
    for c_assumption in L_ASSUMPTIONS {
        n_row = write_bullet_band(ws, styles, c_assumption, n_row)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Patch Deployment Sequence", n_row)?;
    n_row = write_table_header(ws, styles, &L_DEPLOY_SEQ_HEADERS, n_row)?;
    for l_seq in L_DEPLOY_SEQ {
        n_row = write_table_row(ws, styles, &l_seq, n_row, EnumCellTextMode::Plain)?;
    }

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

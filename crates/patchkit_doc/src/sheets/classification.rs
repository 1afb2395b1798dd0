//! "Patch Classification" sheet: P1-P4 definitions and per-category testing
//! scope.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_table_header, write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_CLASS_HEADERS: [&str; 4] = [
    "Classification",
    "Definition",
    "Response SLA",
    "Deployment Target",
];

const L_CLASSIFICATIONS: [[&str; 4]; 4] = [
    [
        "P1-Critical",
        "Patches addressing active exploits, critical CVEs (CVSS \u{2265}7.0), or confirmed \
         security incidents",
        "24-48 hours (critical: 4-24 hours)",
        "4-24 hours",
    ],
    [
        "P2-High",
        "Significant security risk, major functionality impact",
        "4 hours response, 7 days resolution",
        "5-7 days",
    ],
    [
        "P3-Medium",
        "Moderate impact, workaround available",
        "24 hours response",
        "Monthly cadence",
    ],
    [
        "P4-Low",
        "Minimal impact, cosmetic issues, documentation updates",
        "5 business days",
        "Quarterly",
    ],
];

const L_TYPE_HEADERS: [&str; 4] = [
    "Category",
    "Testing Scope",
    "Approval Level",
    "Rollback Complexity",
];

const L_PATCH_TYPES: [[&str; 4]; 4] = [
    [
        "Infrastructure",
        "Reduced - focus on availability",
        "Standard CAB",
        "High",
    ],
    [
        "Database",
        "Moderate - data integrity focus",
        "DBA Lead + CAB",
        "Critical",
    ],
    [
        "Middleware",
        "Moderate - integration focus",
        "Standard CAB",
        "Medium",
    ],
    [
        "Application",
        "Full - functional + integration",
        "Standard CAB",
        "Low",
    ],
];

const L_COL_WIDTHS: [f64; 4] = [20.0, 35.0, 25.0, 20.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "Patch Categorization Framework", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Patch Classification Definitions", n_row)?;
    n_row = write_table_header(ws, styles, &L_CLASS_HEADERS, n_row)?;
    for l_classification in L_CLASSIFICATIONS {
        n_row = write_table_row(ws, styles, &l_classification, n_row, EnumCellTextMode::Wrap)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Patch Type Testing Scope", n_row)?;
    n_row = write_table_header(ws, styles, &L_TYPE_HEADERS, n_row)?;
    for l_patch_type in L_PATCH_TYPES {
        n_row = write_table_row(ws, styles, &l_patch_type, n_row, EnumCellTextMode::Wrap)?;
    }

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

//! "Testing Requirements" sheet: regression scope, smoke-vs-regression
//! criteria, and UAT requirements.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_label_row, write_table_header, write_table_row,
    write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_REGRESSION_HEADERS: [&str; 4] = ["Scope", "Coverage", "Ownership", "Tooling"];

const L_REGRESSION: [[&str; 4]; 3] = [
    [
        "Full regression",
        "100% of functional test cases",
        "QA Team",
        "Automated test framework",
    ],
    [
        "Targeted regression",
        "Affected components + downstream dependencies",
        "QA Team + Development",
        "Automated + manual",
    ],
    [
        "Ad-hoc / exploratory",
        "Boundary conditions, edge cases",
        "QA Team",
        "Manual",
    ],
];

const L_SMOKE_HEADERS: [&str; 3] = ["Factor", "Smoke Test", "Full Regression"];

const L_SMOKE_VS_REGRESSION: [[&str; 3]; 6] = [
    ["When Used", "Every deployment", "Weekly or per release"],
    ["Scope", "Critical path (5-10 tests)", "Complete suite (200+ tests)"],
    ["Execution Time", "<30 minutes", "4-8 hours"],
    ["Ownership", "Operations + Dev", "QA Team"],
    ["Automation", "Fully automated", "Automated + manual"],
    ["Pass Threshold", "100% pass required", "\u{2265}95% pass required"],
];

const L_UAT_REQUIREMENTS: [(&str, &str); 5] = [
    ("UAT Sign-off", "Required for ALL production deployments"),
    ("UAT Participants", "Business process owners, key end users"),
    (
        "UAT Test Cases",
        "Business-critical scenarios only (minimum 15 scenarios)",
    ),
    (
        "UAT Duration",
        "Minimum 1 business day for standard patches; 3-5 business days for major releases",
    ),
    (
        "UAT Defect Severity",
        "Blocking/critical defects must be resolved before PROD promotion",
    ),
];

const L_COL_WIDTHS: [f64; 4] = [25.0, 45.0, 25.0, 25.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "Testing & Validation Requirements", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Regression Testing Requirements", n_row)?;
    n_row = write_table_header(ws, styles, &L_REGRESSION_HEADERS, n_row)?;
    for l_requirement in L_REGRESSION {
        n_row = write_table_row(ws, styles, &l_requirement, n_row, EnumCellTextMode::Wrap)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Smoke Testing vs Full Regression Criteria", n_row)?;
    n_row = write_table_header(ws, styles, &L_SMOKE_HEADERS, n_row)?;
    for l_factor in L_SMOKE_VS_REGRESSION {
        n_row = write_table_row(ws, styles, &l_factor, n_row, EnumCellTextMode::Plain)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "UAT Requirements", n_row)?;
    for (c_criterion, c_requirement) in L_UAT_REQUIREMENTS {
        n_row = write_label_row(ws, styles, c_criterion, c_requirement, n_row, true)?;
    }

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

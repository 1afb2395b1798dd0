//! "SOP - Deployment Steps" sheet: ordered deployment procedures for DEV,
//! TEST, and PROD.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_step_rows, write_title_band,
};
use patchkit_io_xlsx::spec::{SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_DEV_STEPS: [&str; 8] = [
    "1. Prepare the deployment environment",
    "2. Stop dependent services",
    "3. Execute pre-deployment backup",
    "4. Apply the patch",
    "5. Start services",
    "6. Execute smoke tests",
    "7. Verify basic functionality",
    "8. Document deployment results",
];

const L_TEST_STEPS: [&str; 10] = [
    "1. Verify DEV success before promoting to TEST",
    "2. Prepare the TEST deployment environment",
    "3. Stop TEST environment services",
    "4. Execute pre-deployment backup",
    "5. Apply the patch",
    "6. Start services and verify",
    "7. Execute smoke tests (100% pass required)",
    "8. Execute regression test suite",
    "9. Notify QA team for manual testing",
    "10. Obtain UAT sign-off",
];

const L_PROD_STEPS: [&str; 12] = [
    "1. Final pre-deployment verification",
    "2. Send deployment start notification",
    "3. Enter maintenance window",
    "4. Stop production services",
    "5. Execute production backup",
    "6. Apply the patch",
    "7. Verify patch application",
    "8. Start production services",
    "9. Execute post-deployment smoke tests",
    "10. Verify monitoring and alerting",
    "11. Execute data integrity checks",
    "12. Send deployment completion notification",
];

const L_COL_WIDTHS: [f64; 1] = [60.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "SOP - Deployment Procedures", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "DEV Deployment Steps", n_row)?;
    n_row = write_step_rows(ws, styles, &L_DEV_STEPS, n_row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "TEST Deployment Steps", n_row)?;
    n_row = write_step_rows(ws, styles, &L_TEST_STEPS, n_row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "PROD Deployment Steps", n_row)?;
    n_row = write_step_rows(ws, styles, &L_PROD_STEPS, n_row)?;

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

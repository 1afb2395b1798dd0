//! "SOP - Overview" sheet: playbook purpose, target audience, and usage
//! triggers.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_note_band, write_subhead_row, write_table_header,
    write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const TXT_SCOPE: &str = "This operational playbook provides step-by-step procedures for \
executing patch deployments across the three-environment system (DEV \u{2192} TEST \u{2192} \
PROD). It translates the Patch Management Strategy into actionable tasks for operations teams.";

const L_AUDIENCE: [[&str; 2]; 5] = [
    [
        "IT Operations Engineers",
        "Executing deployments, validations, rollbacks",
    ],
    [
        "DevOps Engineers",
        "Pipeline execution, automation troubleshooting",
    ],
    [
        "Help Desk/Support Staff",
        "Understanding deployment status, user communication",
    ],
    [
        "Test Engineers",
        "TEST environment deployment and validation",
    ],
    [
        "On-Call Engineers",
        "Emergency response, incident handling",
    ],
];

const TXT_WHEN_TO_USE: &str = "Use this playbook when:\n\
\u{2022} Deploying routine monthly patches\n\
\u{2022} Applying security patches (planned or emergency)\n\
\u{2022} Executing major version upgrades\n\
\u{2022} Performing emergency patch response\n\
\u{2022} Executing rollback procedures\n\
\u{2022} Validating post-deployment system state";

/// Purpose/when-to-use paragraphs merge across four columns, not the band
/// span: the sheet only sizes two columns.
const N_NCOLS_NOTE: u16 = 4;

const L_COL_WIDTHS: [f64; 2] = [25.0, 50.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "SOP - Playbook Overview", row)?;
    n_row += 1;

    n_row = write_subhead_row(ws, styles, "Purpose and Scope", n_row)?;
    n_row = write_note_band(ws, styles, TXT_SCOPE, n_row, N_NCOLS_NOTE)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Target Audience", n_row)?;
    n_row = write_table_header(ws, styles, &["Role", "Use This Playbook For"], n_row)?;
    for l_role in L_AUDIENCE {
        n_row = write_table_row(ws, styles, &l_role, n_row, EnumCellTextMode::Plain)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "When to Use This Playbook", n_row)?;
    n_row = write_note_band(ws, styles, TXT_WHEN_TO_USE, n_row, N_NCOLS_NOTE)?;

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

//! "Governance Controls" sheet: approvals, communication plan, and
//! documentation retention requirements.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_table_header, write_table_row, write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_APPROVAL_HEADERS: [&str; 4] = ["Environment", "Approval Required", "Approver", "Lead Time"];

const L_APPROVALS: [[&str; 4]; 4] = [
    ["DEV", "Notification only", "Development Lead", "Same day"],
    ["TEST", "Change request approval", "Test Manager", "24 hours"],
    ["PROD", "CAB approval (standard)", "CAB (majority)", "5 business days"],
    [
        "PROD",
        "Emergency approval",
        "CAB Chair + Security Lead",
        "4-24 hours",
    ],
];

const L_COMM_HEADERS: [&str; 4] = ["Stakeholder", "Notification Trigger", "Timing", "Channel"];

const L_COMM_PLAN: [[&str; 4]; 7] = [
    [
        "Development Team",
        "Patch available in DEV",
        "Upon release",
        "Teams / Email",
    ],
    ["QA Team", "Deployment to TEST", "24 hrs before", "Teams / Email"],
    [
        "Business Stakeholders",
        "PROD deployment planned",
        "5 business days before",
        "Email",
    ],
    [
        "End Users",
        "PROD deployment",
        "48 hours before (planned)",
        "Portal / Email",
    ],
    ["CAB", "All changes", "Per approval timeline", "Agenda + Email"],
    [
        "IT Operations",
        "All deployments",
        "24 hours before",
        "Teams / PagerDuty",
    ],
    ["Security Team", "Security patches", "Immediate", "Teams / Phone"],
];

const L_DOC_HEADERS: [&str; 3] = ["Document", "Required For", "Retention"];

const L_DOC_REQUIREMENTS: [[&str; 3]; 6] = [
    ["Change Request (CR)", "All environments", "7 years"],
    ["Test Results Report", "TEST + PROD", "5 years"],
    ["UAT Sign-off", "PROD", "5 years"],
    ["Rollback Procedure", "PROD", "5 years"],
    ["Post-Implementation Review (PIR)", "PROD", "7 years"],
    [
        "Security Impact Assessment",
        "Security patches, major upgrades",
        "7 years",
    ],
];

const L_COL_WIDTHS: [f64; 4] = [22.0, 35.0, 22.0, 22.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "Governance & Controls", row)?;
    n_row += 1;

    n_row = write_header_band(
        ws,
        styles,
        "Change Management Approvals per Environment",
        n_row,
    )?;
    n_row = write_table_header(ws, styles, &L_APPROVAL_HEADERS, n_row)?;
    for l_approval in L_APPROVALS {
        n_row = write_table_row(ws, styles, &l_approval, n_row, EnumCellTextMode::Plain)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Communication Plan", n_row)?;
    n_row = write_table_header(ws, styles, &L_COMM_HEADERS, n_row)?;
    for l_notification in L_COMM_PLAN {
        n_row = write_table_row(ws, styles, &l_notification, n_row, EnumCellTextMode::Wrap)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Documentation Requirements", n_row)?;
    n_row = write_table_header(ws, styles, &L_DOC_HEADERS, n_row)?;
    for l_document in L_DOC_REQUIREMENTS {
        n_row = write_table_row(ws, styles, &l_document, n_row, EnumCellTextMode::Plain)?;
    }

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

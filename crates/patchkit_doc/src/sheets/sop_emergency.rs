//! "SOP - Emergency" sheet: emergency classification criteria, accelerated
//! approval, compressed timeline, and post-incident review.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_step_rows, write_table_header, write_table_row,
    write_title_band,
};
use patchkit_io_xlsx::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_CRITERIA_HEADERS: [&str; 3] = ["Criterion", "Threshold", "Example"];

const L_EMERGENCY_CRITERIA: [[&str; 3]; 5] = [
    [
        "Active Exploitation",
        "Confirmed in-the-wild exploit",
        "CVE with public PoC",
    ],
    ["CVSS Score", "\u{2265}9.0 (Critical)", "Remote code execution"],
    [
        "Service Availability",
        "Immediate risk",
        "Ransomware indicators",
    ],
    [
        "Regulatory Directive",
        "Required immediate action",
        "Compliance enforcement",
    ],
    [
        "Business Impact",
        "Complete system outage potential",
        "Critical system down",
    ],
];

const L_APPROVAL_STEPS: [&str; 4] = [
    "1. Contact emergency approvers in parallel: CAB Chair, Security Lead, IT Operations Manager",
    "2. Provide emergency approval request with CVSS score and risk assessment",
    "3. Obtain verbal approval (document in CR) - document approver name, time, conditions",
    "4. Document expedited approval in CR - Approval type, Approvers, Approval time, Conditions",
];

const L_TIMELINE_HEADERS: [&str; 3] = ["Phase", "Standard", "Emergency"];

const L_TIMELINE: [[&str; 3]; 4] = [
    ["Approval", "5 days", "4-24 hours"],
    ["DEV Deployment", "1 day", "Same day"],
    ["PROD Deployment", "1-2 days", "4-12 hours"],
    ["Post-Deploy Validation", "Standard", "24-48 hours in TEST"],
];

const L_PIR_STEPS: [&str; 4] = [
    "1. Schedule Post-Incident Review (PIR) within 5 business days of deployment",
    "2. Document PIR agenda: Timeline, Effectiveness, Process improvements, Lessons learned",
    "3. Complete PIR documentation: Root cause, Response effectiveness, Deviations, \
     Recommendations",
    "4. Submit PIR to CAB for review and archive for compliance",
];

const L_COL_WIDTHS: [f64; 3] = [25.0, 30.0, 30.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "SOP - Emergency Patch Procedures", row)?;
    n_row += 1;

    n_row = write_header_band(
        ws,
        styles,
        "Trigger Criteria for Emergency Classification",
        n_row,
    )?;
    n_row = write_table_header(ws, styles, &L_CRITERIA_HEADERS, n_row)?;
    for l_criterion in L_EMERGENCY_CRITERIA {
        n_row = write_table_row(ws, styles, &l_criterion, n_row, EnumCellTextMode::Plain)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Accelerated Approval Process", n_row)?;
    n_row = write_step_rows(ws, styles, &L_APPROVAL_STEPS, n_row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Compressed Deployment Timeline", n_row)?;
    n_row = write_table_header(ws, styles, &L_TIMELINE_HEADERS, n_row)?;
    for l_phase in L_TIMELINE {
        n_row = write_table_row(ws, styles, &l_phase, n_row, EnumCellTextMode::Plain)?;
    }
    n_row += 1;

    n_row = write_header_band(ws, styles, "Post-Incident Review Requirements", n_row)?;
    n_row = write_step_rows(ws, styles, &L_PIR_STEPS, n_row)?;

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

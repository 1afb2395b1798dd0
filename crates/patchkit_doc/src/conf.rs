//! Fixed output destination and sheet registry.

/// Destination path of the generated workbook. Compiled in; there is no
/// runtime configuration surface.
pub const PATH_FILE_OUT: &str = "Patch_Management_Complete.xlsx";

/// The 12 worksheet names, in workbook order.
pub const L_SHEET_NAMES: [&str; 12] = [
    "Executive Summary",
    "Patch Promotion Flow",
    "Testing Requirements",
    "Patch Classification",
    "Governance Controls",
    "RACI Matrix",
    "Templates & Checklists",
    "SOP - Overview",
    "SOP - Deployment Steps",
    "SOP - Rollback",
    "SOP - Troubleshooting",
    "SOP - Emergency",
];

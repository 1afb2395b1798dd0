//! "SOP - Troubleshooting" sheet: diagnostic step lists for deployment,
//! startup, performance, and data-integrity issues.

use patchkit_io_xlsx::layout::{
    set_column_widths, write_header_band, write_step_rows, write_subhead_row, write_title_band,
};
use patchkit_io_xlsx::spec::{SheetWriteError, SpecStyleSet};
use rust_xlsxwriter::Worksheet;

const L_DEPLOY_FAILURE_STEPS: [&str; 6] = [
    "1. Check error message in output",
    "2. Review deployment logs: tail -100 /var/log/[deployment].log",
    "3. Verify file permissions: ls -la /opt/[application]",
    "4. Verify disk space: df -h",
    "5. Check dependencies: ldd /opt/[application]/bin/[binary]",
    "6. Retry deployment if transient error",
];

const L_SERVICE_START_STEPS: [&str; 7] = [
    "1. Check service status: systemctl status [service]",
    "2. Review startup logs: journalctl -u [service] -n 100",
    "3. Verify configuration syntax: nginx -t",
    "4. Check port conflicts: ss -tuln | grep [port]",
    "5. Verify file permissions",
    "6. Check dependencies: ldd on libraries",
    "7. Rollback if unresolvable",
];

const L_PERFORMANCE_STEPS: [&str; 7] = [
    "1. Check resource utilization: top, free -h, iostat",
    "2. Compare with baseline metrics",
    "3. Check database query performance",
    "4. Verify index usage",
    "5. Check for new bottlenecks",
    "6. Enable slow query logging if database",
    "7. Rollback if >20% degradation",
];

const L_DATA_INTEGRITY_STEPS: [&str; 7] = [
    "1. HALT deployment immediately",
    "2. Do NOT make any changes",
    "3. Verify data with pre-deployment backup",
    "4. Compare record counts",
    "5. Check referential integrity",
    "6. Execute ROLLBACK immediately",
    "7. Escalate to DBA Lead",
];

const L_COL_WIDTHS: [f64; 1] = [60.0];

pub fn build(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = write_title_band(ws, styles, "SOP - Troubleshooting Guide", row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Patch Deployment Failures", n_row)?;
    n_row = write_subhead_row(ws, styles, "Issue: Deployment script fails", n_row)?;
    n_row = write_step_rows(ws, styles, &L_DEPLOY_FAILURE_STEPS, n_row)?;
    n_row += 1;

    n_row = write_subhead_row(ws, styles, "Issue: Service won't start after patch", n_row)?;
    n_row = write_step_rows(ws, styles, &L_SERVICE_START_STEPS, n_row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Performance Degradation", n_row)?;
    n_row = write_subhead_row(ws, styles, "Issue: Application slow after patch", n_row)?;
    n_row = write_step_rows(ws, styles, &L_PERFORMANCE_STEPS, n_row)?;
    n_row += 1;

    n_row = write_header_band(ws, styles, "Data Integrity Concerns", n_row)?;
    n_row = write_subhead_row(ws, styles, "Issue: Data inconsistency after patch", n_row)?;
    n_row = write_step_rows(ws, styles, &L_DATA_INTEGRITY_STEPS, n_row)?;

    set_column_widths(ws, &L_COL_WIDTHS)?;
    Ok(n_row)
}

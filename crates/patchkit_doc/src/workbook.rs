//! Workbook orchestration and serialization.
//!
//! Builds all 12 worksheets in fixed order and saves the workbook once,
//! synchronously. Document properties carry a fixed creation datetime so
//! repeated runs serialize to identical bytes.

use std::fmt;
use std::path::{Path, PathBuf};

use patchkit_io_xlsx::conf::derive_policy_style_set;
use patchkit_io_xlsx::spec::{SheetWriteError, SpecStyleSet};
use patchkit_io_xlsx::util::sanitize_sheet_name;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, Worksheet};

use crate::conf::L_SHEET_NAMES;
use crate::report::ReportDocBuild;
use crate::sheets;

/// One sheet builder: (worksheet, styles, start row) -> final row.
pub type FnSheetBuilder = fn(&mut Worksheet, &SpecStyleSet, u32) -> Result<u32, SheetWriteError>;

/// Builders paired one-to-one with [`L_SHEET_NAMES`].
const L_SHEET_BUILDERS: [FnSheetBuilder; 12] = [
    sheets::summary::build,
    sheets::promotion::build,
    sheets::testing::build,
    sheets::classification::build,
    sheets::governance::build,
    sheets::raci::build,
    sheets::checklists::build,
    sheets::sop_overview::build,
    sheets::sop_deploy::build,
    sheets::sop_rollback::build,
    sheets::sop_troubleshoot::build,
    sheets::sop_emergency::build,
];

////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Top-level generator failures.
#[derive(Debug)]
pub enum DocBuildError {
    /// Document property assembly was rejected by the serializer.
    InvalidDocProperties(String),
    /// One sheet builder failed.
    SheetBuildFailed {
        /// Name of the sheet whose builder failed.
        sheet_name: String,
        /// Underlying layout error text.
        message: String,
    },
    /// Final workbook save failed (permissions, missing directory, disk).
    WorkbookSaveFailed {
        /// Destination path that could not be written.
        path: PathBuf,
        /// Underlying IO/serializer error text.
        message: String,
    },
}

impl fmt::Display for DocBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDocProperties(msg) => {
                write!(f, "Invalid document properties: {msg}")
            }
            Self::SheetBuildFailed {
                sheet_name,
                message,
            } => write!(f, "Failed to build sheet {sheet_name:?}: {message}"),
            Self::WorkbookSaveFailed { path, message } => {
                write!(f, "Failed to save workbook {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for DocBuildError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Orchestration

/// Assemble the full in-memory workbook and the per-run report.
pub fn build_workbook() -> Result<(Workbook, ReportDocBuild), DocBuildError> {
    let styles = derive_policy_style_set();

    let mut workbook = Workbook::new();
    workbook.set_properties(&derive_doc_properties()?);

    let mut report = ReportDocBuild::default();
    for (c_sheet_name, build) in L_SHEET_NAMES.iter().zip(L_SHEET_BUILDERS) {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sanitize_sheet_name(c_sheet_name, "_"))
            .map_err(|err| DocBuildError::SheetBuildFailed {
                sheet_name: c_sheet_name.to_string(),
                message: err.to_string(),
            })?;

        let n_row_final =
            build(worksheet, &styles, 0).map_err(|err| DocBuildError::SheetBuildFailed {
                sheet_name: c_sheet_name.to_string(),
                message: err.to_string(),
            })?;
        report.add_sheet(*c_sheet_name, n_row_final);
    }

    Ok((workbook, report))
}

/// Build the workbook and save it to `path_file_out` in one synchronous call.
///
/// No partial-write recovery: the run either produces the file or fails and
/// writes nothing usable.
pub fn write_document(path_file_out: &Path) -> Result<ReportDocBuild, DocBuildError> {
    let (mut workbook, report) = build_workbook()?;

    workbook
        .save(path_file_out)
        .map_err(|err| DocBuildError::WorkbookSaveFailed {
            path: path_file_out.to_path_buf(),
            message: err.to_string(),
        })?;

    Ok(report)
}

/// Deterministic document properties. The fixed creation datetime keeps
/// repeated runs byte-identical.
fn derive_doc_properties() -> Result<DocProperties, DocBuildError> {
    let datetime_created = ExcelDateTime::from_ymd(2026, 2, 1)
        .map_err(|err| DocBuildError::InvalidDocProperties(err.to_string()))?;

    Ok(DocProperties::new()
        .set_title("Patch Management Strategy")
        .set_author("Enterprise Architecture / IT Operations")
        .set_creation_datetime(&datetime_created))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::build_workbook;
    use crate::conf::L_SHEET_NAMES;

    #[test]
    fn build_workbook_produces_all_sheets_in_order() {
        let (_workbook, report) = build_workbook().expect("build workbook");

        assert_eq!(report.sheet_count(), L_SHEET_NAMES.len());
        for (sheet, c_name_expected) in report.sheets.iter().zip(L_SHEET_NAMES) {
            assert_eq!(sheet.sheet_name, c_name_expected);
            assert!(sheet.n_rows_written > 0);
        }
    }
}

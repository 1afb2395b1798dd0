//! `patchkit_doc` v1:
//! Generator for the enterprise patch-management policy workbook.
//!
//! Architecture:
//! - `conf`     : fixed output path and sheet registry
//! - `report`   : per-run build report model
//! - `sheets`   : the 12 sheet builders with their literal policy content
//! - `workbook` : workbook orchestration and serialization
pub mod conf;
pub mod report;
pub mod sheets;
pub mod workbook;

pub use conf::{L_SHEET_NAMES, PATH_FILE_OUT};
pub use report::{ReportDocBuild, SpecSheetBuilt};
pub use workbook::{DocBuildError, build_workbook, write_document};

//! `patchkit_io_xlsx` v1:
//! XLSX layout kernel for static policy documents.
//!
//! Architecture:
//! - `conf`   : constants and style registry factory
//! - `spec`   : format/style models and error types
//! - `util`   : pure helper functions
//! - `layout` : band/table/width layout operations
pub mod conf;
pub mod layout;
pub mod spec;
pub mod util;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_BAND, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL, derive_policy_style_set,
};
pub use layout::{
    set_column_widths, write_bullet_band, write_data_cell, write_field_row, write_header_band,
    write_label_row, write_legend_band, write_note_band, write_step_rows, write_subhead_row,
    write_table_header, write_table_row, write_title_band,
};
pub use spec::{EnumCellTextMode, SheetWriteError, SpecCellFormat, SpecStyleSet};
pub use util::{derive_xlsx_format, sanitize_sheet_name};

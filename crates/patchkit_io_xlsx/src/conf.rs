//! Layout constants and the document style registry factory.

use crate::spec::{SpecCellFormat, SpecStyleSet};
use crate::util::derive_xlsx_format;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Merge span (in columns) of title and section header bands.
pub const N_NCOLS_BAND: u16 = 5;

/// Build the fixed style registry used by every sheet builder.
///
/// All tokens derive from one Calibri base overlaid with per-role patches;
/// the result is read-only for the process lifetime.
pub fn derive_policy_style_set() -> SpecStyleSet {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_name: Some("Calibri".to_string()),
        font_size: Some(10),
        ..Default::default()
    };

    let spec_title = cfg_base_fmt_spec.with_(SpecCellFormat {
        font_size: Some(16),
        bold: Some(true),
        font_color: Some("#FFFFFF".to_string()),
        bg_color: Some("#2F5496".to_string()),
        align: Some("left".to_string()),
        valign: Some("vcenter".to_string()),
        ..Default::default()
    });
    let spec_header = cfg_base_fmt_spec.with_(SpecCellFormat {
        font_size: Some(12),
        bold: Some(true),
        bg_color: Some("#D9E1F2".to_string()),
        ..Default::default()
    });
    let spec_header_cell = spec_header.with_(SpecCellFormat {
        border: Some(1),
        ..Default::default()
    });
    let spec_label = cfg_base_fmt_spec.with_(SpecCellFormat {
        font_size: Some(12),
        bold: Some(true),
        border: Some(1),
        ..Default::default()
    });
    let spec_subhead = cfg_base_fmt_spec.with_(SpecCellFormat {
        font_size: Some(12),
        bold: Some(true),
        ..Default::default()
    });
    let spec_body = cfg_base_fmt_spec.with_(SpecCellFormat {
        border: Some(1),
        ..Default::default()
    });
    let spec_body_wrap = spec_body.with_(SpecCellFormat {
        text_wrap: Some(true),
        valign: Some("top".to_string()),
        ..Default::default()
    });
    let spec_body_center = spec_body.with_(SpecCellFormat {
        align: Some("center".to_string()),
        ..Default::default()
    });
    let spec_note = cfg_base_fmt_spec.with_(SpecCellFormat {
        text_wrap: Some(true),
        ..Default::default()
    });
    let spec_legend = cfg_base_fmt_spec.with_(SpecCellFormat {
        font_size: Some(9),
        italic: Some(true),
        ..Default::default()
    });

    SpecStyleSet {
        fmt_title: derive_xlsx_format(&spec_title),
        fmt_header_band: derive_xlsx_format(&spec_header),
        fmt_header_cell: derive_xlsx_format(&spec_header_cell),
        fmt_label: derive_xlsx_format(&spec_label),
        fmt_subhead: derive_xlsx_format(&spec_subhead),
        fmt_body: derive_xlsx_format(&spec_body),
        fmt_body_wrap: derive_xlsx_format(&spec_body_wrap),
        fmt_body_center: derive_xlsx_format(&spec_body_center),
        fmt_note: derive_xlsx_format(&spec_note),
        fmt_plain: derive_xlsx_format(&cfg_base_fmt_spec),
        fmt_legend: derive_xlsx_format(&spec_legend),
    }
}

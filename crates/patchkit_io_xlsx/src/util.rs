//! Stateless helper utilities used by the layout operations.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::SpecCellFormat;

////////////////////////////////////////////////////////////////////////////////
// #region FormatConversion

/// Convert a declarative format spec into a concrete xlsxwriter format.
pub fn derive_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

/// Map numeric border code to xlsxwriter border style.
pub fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        6 => FormatBorder::Double,
        _ => FormatBorder::None,
    }
}

/// Map alignment keyword to xlsxwriter alignment.
pub fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "justify" => Some(FormatAlign::Justify),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rust_xlsxwriter::{FormatAlign, FormatBorder};

    use super::{derive_format_align, derive_format_border, sanitize_sheet_name};

    #[test]
    fn test_derive_format_border_maps_known_codes() {
        assert_eq!(derive_format_border(0), FormatBorder::None);
        assert_eq!(derive_format_border(1), FormatBorder::Thin);
        assert_eq!(derive_format_border(2), FormatBorder::Medium);
        assert_eq!(derive_format_border(99), FormatBorder::None);
    }

    #[test]
    fn test_derive_format_align_is_case_insensitive() {
        assert_eq!(derive_format_align("Left"), Some(FormatAlign::Left));
        assert_eq!(
            derive_format_align(" vcenter "),
            Some(FormatAlign::VerticalCenter)
        );
        assert_eq!(derive_format_align("diagonal"), None);
    }

    #[test]
    fn test_sanitize_sheet_name_replaces_and_caps() {
        assert_eq!(sanitize_sheet_name("SOP - Rollback", "_"), "SOP - Rollback");
        assert_eq!(sanitize_sheet_name("a/b:c", "_"), "a_b_c");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");

        let long = "x".repeat(64);
        assert_eq!(sanitize_sheet_name(&long, "_").chars().count(), 31);
    }
}

//! Shared layout specification models and error types.

use std::fmt;

use rust_xlsxwriter::{Format, XlsxError};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Declarative cell format specification, overlaid into concrete
/// [`rust_xlsxwriter::Format`] values by [`crate::util::derive_xlsx_format`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Background fill color (`#RRGGBB`).
    pub bg_color: Option<String>,
    /// Font color (`#RRGGBB`).
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StyleRegistry

/// Immutable registry of prebuilt format tokens shared by every sheet builder.
///
/// Built once at process start by [`crate::conf::derive_policy_style_set`] and
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct SpecStyleSet {
    /// Title band: large bold white text on dark fill.
    pub fmt_title: Format,
    /// Section header band: bold text on light fill, no border.
    pub fmt_header_band: Format,
    /// Table header cell: bold text on light fill, thin border.
    pub fmt_header_cell: Format,
    /// Row-leading label cell: bold text, thin border.
    pub fmt_label: Format,
    /// Inline caption: bold text, no fill or border.
    pub fmt_subhead: Format,
    /// Data cell: normal text, thin border.
    pub fmt_body: Format,
    /// Data cell with word wrap and vertical-top alignment.
    pub fmt_body_wrap: Format,
    /// Data cell with centered text (matrix-style columns).
    pub fmt_body_center: Format,
    /// Merged paragraph band: wrapped text, no border.
    pub fmt_note: Format,
    /// Unstyled text cell.
    pub fmt_plain: Format,
    /// Small italic legend line.
    pub fmt_legend: Format,
}

/// Text treatment applied to the cells of one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumCellTextMode {
    /// Bordered cell, default alignment.
    #[default]
    Plain,
    /// Bordered cell with word wrap and vertical-top alignment.
    Wrap,
    /// Bordered cell with horizontally centered text.
    Center,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Layout-level write failures.
///
/// `ColumnOverflow` is a programmer error (an index past the `u16` column
/// space) and fails fast; `Xlsx` carries serialization-layer errors from
/// `rust_xlsxwriter`.
#[derive(Debug)]
pub enum SheetWriteError {
    /// Column position does not fit the worksheet column index type.
    ColumnOverflow(usize),
    /// Underlying xlsx write/merge/save error.
    Xlsx(XlsxError),
}

impl fmt::Display for SheetWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnOverflow(idx) => write!(f, "Column index overflow: {idx}"),
            Self::Xlsx(err) => write!(f, "xlsx write error: {err}"),
        }
    }
}

impl std::error::Error for SheetWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ColumnOverflow(_) => None,
            Self::Xlsx(err) => Some(err),
        }
    }
}

impl From<XlsxError> for SheetWriteError {
    fn from(err: XlsxError) -> Self {
        Self::Xlsx(err)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SpecCellFormat;

    #[test]
    fn merge_prefers_right_side_non_none_values() {
        let base = SpecCellFormat {
            font_name: Some("Calibri".to_string()),
            font_size: Some(10),
            bold: Some(false),
            ..Default::default()
        };
        let patch = SpecCellFormat {
            font_size: Some(16),
            bold: Some(true),
            bg_color: Some("#2F5496".to_string()),
            ..Default::default()
        };

        let merged = base.merge(&patch);
        assert_eq!(merged.font_name.as_deref(), Some("Calibri"));
        assert_eq!(merged.font_size, Some(16));
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.bg_color.as_deref(), Some("#2F5496"));
        assert_eq!(merged.border, None);
    }

    #[test]
    fn with_keeps_base_untouched() {
        let base = SpecCellFormat {
            font_size: Some(10),
            ..Default::default()
        };
        let patched = base.with_(SpecCellFormat {
            font_size: Some(12),
            ..Default::default()
        });

        assert_eq!(base.font_size, Some(10));
        assert_eq!(patched.font_size, Some(12));
    }
}

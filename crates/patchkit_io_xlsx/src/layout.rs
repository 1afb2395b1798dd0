//! Band/table layout operations with an explicit row cursor.
//!
//! Every operation writes at the given row and returns the next unused row
//! index, so builders thread the cursor through as a plain value instead of
//! mutating shared state. The cursor must strictly increase within a sheet;
//! skipping a row (spacer) is the caller adding one.

use rust_xlsxwriter::Worksheet;

use crate::conf::N_NCOLS_BAND;
use crate::spec::{EnumCellTextMode, SheetWriteError, SpecStyleSet};

////////////////////////////////////////////////////////////////////////////////
// #region Bands

/// Write the sheet title band, merged across [`N_NCOLS_BAND`] columns.
pub fn write_title_band(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
) -> Result<u32, SheetWriteError> {
    ws.merge_range(row, 0, row, N_NCOLS_BAND - 1, text, &styles.fmt_title)?;
    Ok(row + 1)
}

/// Write a section header band, merged across [`N_NCOLS_BAND`] columns.
pub fn write_header_band(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
) -> Result<u32, SheetWriteError> {
    ws.merge_range(row, 0, row, N_NCOLS_BAND - 1, text, &styles.fmt_header_band)?;
    Ok(row + 1)
}

/// Write a wrapped paragraph merged across `span` columns (`span >= 2`).
pub fn write_note_band(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
    span: u16,
) -> Result<u32, SheetWriteError> {
    ws.merge_range(row, 0, row, span - 1, text, &styles.fmt_note)?;
    Ok(row + 1)
}

/// Write one bullet line merged across [`N_NCOLS_BAND`] columns.
pub fn write_bullet_band(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
) -> Result<u32, SheetWriteError> {
    let c_text = format!("\u{2022} {text}");
    ws.merge_range(row, 0, row, N_NCOLS_BAND - 1, &c_text, &styles.fmt_plain)?;
    Ok(row + 1)
}

/// Write a small italic legend line merged across `span` columns.
pub fn write_legend_band(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
    span: u16,
) -> Result<u32, SheetWriteError> {
    ws.merge_range(row, 0, row, span - 1, text, &styles.fmt_legend)?;
    Ok(row + 1)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RowsAndCells

/// Write a bold caption into column 0, unmerged and unbordered.
pub fn write_subhead_row(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
) -> Result<u32, SheetWriteError> {
    ws.write_string_with_format(row, 0, text, &styles.fmt_subhead)?;
    Ok(row + 1)
}

/// Write one table header cell per value, starting at column 0.
pub fn write_table_header(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    headers: &[&str],
    row: u32,
) -> Result<u32, SheetWriteError> {
    for (n_idx_col, c_header) in headers.iter().enumerate() {
        ws.write_string_with_format(row, cast_col_num(n_idx_col)?, *c_header, &styles.fmt_header_cell)?;
    }
    Ok(row + 1)
}

/// Write an ordered sequence of values across columns starting at column 0,
/// each with a thin border and the text treatment selected by `rule_text`.
pub fn write_table_row(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    values: &[&str],
    row: u32,
    rule_text: EnumCellTextMode,
) -> Result<u32, SheetWriteError> {
    let fmt_cell = match rule_text {
        EnumCellTextMode::Plain => &styles.fmt_body,
        EnumCellTextMode::Wrap => &styles.fmt_body_wrap,
        EnumCellTextMode::Center => &styles.fmt_body_center,
    };

    for (n_idx_col, c_value) in values.iter().enumerate() {
        ws.write_string_with_format(row, cast_col_num(n_idx_col)?, *c_value, fmt_cell)?;
    }
    Ok(row + 1)
}

/// Write a bold bordered label in column 0 and a bordered value in column 1.
pub fn write_label_row(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    label: &str,
    value: &str,
    row: u32,
    if_wrap: bool,
) -> Result<u32, SheetWriteError> {
    let fmt_value = if if_wrap {
        &styles.fmt_body_wrap
    } else {
        &styles.fmt_body
    };

    ws.write_string_with_format(row, 0, label, &styles.fmt_label)?;
    ws.write_string_with_format(row, 1, value, fmt_value)?;
    Ok(row + 1)
}

/// Write a single bordered, wrapped, vertical-top data cell at (`row`, `col`).
pub fn write_data_cell(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    text: &str,
    row: u32,
    col: u16,
) -> Result<u32, SheetWriteError> {
    ws.write_string_with_format(row, col, text, &styles.fmt_body_wrap)?;
    Ok(row + 1)
}

/// Write ordered procedure lines, one bordered cell per row in column 0.
pub fn write_step_rows(
    ws: &mut Worksheet,
    styles: &SpecStyleSet,
    steps: &[&str],
    row: u32,
) -> Result<u32, SheetWriteError> {
    let mut n_row = row;
    for c_step in steps {
        ws.write_string_with_format(n_row, 0, *c_step, &styles.fmt_body)?;
        n_row += 1;
    }
    Ok(n_row)
}

/// Write an unstyled label/value pair into columns 0 and 1.
pub fn write_field_row(
    ws: &mut Worksheet,
    label: &str,
    value: &str,
    row: u32,
) -> Result<u32, SheetWriteError> {
    ws.write_string(row, 0, label)?;
    ws.write_string(row, 1, value)?;
    Ok(row + 1)
}

/// Set display widths for columns `0..widths.len()`, one-to-one by position.
pub fn set_column_widths(ws: &mut Worksheet, widths: &[f64]) -> Result<(), SheetWriteError> {
    for (n_idx_col, n_width) in widths.iter().enumerate() {
        ws.set_column_width(cast_col_num(n_idx_col)?, *n_width)?;
    }
    Ok(())
}

fn cast_col_num(value: usize) -> Result<u16, SheetWriteError> {
    u16::try_from(value).map_err(|_| SheetWriteError::ColumnOverflow(value))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rust_xlsxwriter::Worksheet;

    use super::*;
    use crate::conf::derive_policy_style_set;
    use crate::spec::EnumCellTextMode;

    #[test]
    fn bands_and_rows_advance_cursor_by_one() {
        let mut ws = Worksheet::new();
        let styles = derive_policy_style_set();

        let mut n_row = write_title_band(&mut ws, &styles, "Title", 0).expect("title");
        assert_eq!(n_row, 1);

        n_row = write_header_band(&mut ws, &styles, "Section", n_row).expect("header");
        assert_eq!(n_row, 2);

        n_row = write_note_band(&mut ws, &styles, "paragraph", n_row, 4).expect("note");
        assert_eq!(n_row, 3);

        n_row = write_subhead_row(&mut ws, &styles, "Caption", n_row).expect("subhead");
        assert_eq!(n_row, 4);

        n_row = write_label_row(&mut ws, &styles, "DEV", "criteria", n_row, true).expect("label");
        assert_eq!(n_row, 5);

        n_row = write_field_row(&mut ws, "Version:", "1.0", n_row).expect("field");
        assert_eq!(n_row, 6);

        n_row = write_data_cell(&mut ws, &styles, "cell", n_row, 2).expect("cell");
        assert_eq!(n_row, 7);
    }

    #[test]
    fn table_rows_consume_exactly_one_row_regardless_of_width() {
        let mut ws = Worksheet::new();
        let styles = derive_policy_style_set();

        let n_row =
            write_table_header(&mut ws, &styles, &["A", "B", "C", "D"], 0).expect("table header");
        assert_eq!(n_row, 1);

        let n_row = write_table_row(
            &mut ws,
            &styles,
            &["1", "2", "3", "4", "5", "6", "7"],
            n_row,
            EnumCellTextMode::Center,
        )
        .expect("table row");
        assert_eq!(n_row, 2);
    }

    #[test]
    fn step_rows_advance_by_step_count() {
        let mut ws = Worksheet::new();
        let styles = derive_policy_style_set();

        let steps = ["1. One", "2. Two", "3. Three"];
        let n_row = write_step_rows(&mut ws, &styles, &steps, 5).expect("steps");
        assert_eq!(n_row, 8);
    }

    #[test]
    fn set_column_widths_accepts_positional_widths() {
        let mut ws = Worksheet::new();

        set_column_widths(&mut ws, &[15.0, 40.0, 40.0, 25.0]).expect("widths");
        set_column_widths(&mut ws, &[]).expect("empty widths");
    }
}

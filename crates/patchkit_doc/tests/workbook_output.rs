//! End-to-end checks: generate the workbook to a temp path and read it back.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use calamine::{Data, Reader, Xlsx, open_workbook};
use patchkit_doc::conf::L_SHEET_NAMES;
use patchkit_doc::workbook::write_document;

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new() -> Self {
        let n = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("patchkit_doc_test_{n}"));
        std::fs::create_dir_all(&path).expect("create test dir");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn open_generated(path: &Path) -> Xlsx<std::io::BufReader<std::fs::File>> {
    open_workbook(path).expect("open generated workbook")
}

fn cell_text(workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>, sheet: &str, row: u32, col: u32) -> String {
    let range = workbook.worksheet_range(sheet).expect("worksheet range");
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[test]
fn generator_writes_twelve_sheets_in_fixed_order() {
    let tmp = TestDir::new();
    let path_file_out = tmp.path().join("Patch_Management_Complete.xlsx");

    let report = write_document(&path_file_out).expect("write document");
    assert!(path_file_out.exists());
    assert_eq!(report.sheet_count(), 12);

    let workbook = open_generated(&path_file_out);
    assert_eq!(workbook.sheet_names().to_vec(), L_SHEET_NAMES.to_vec());
}

#[test]
fn raci_matrix_first_data_row_matches_policy() {
    let tmp = TestDir::new();
    let path_file_out = tmp.path().join("out.xlsx");
    write_document(&path_file_out).expect("write document");

    let mut workbook = open_generated(&path_file_out);

    assert_eq!(
        cell_text(&mut workbook, "RACI Matrix", 0, 0),
        "RACI Matrix for Patch Activities"
    );
    assert_eq!(cell_text(&mut workbook, "RACI Matrix", 2, 0), "Activity");

    let l_row_expected = ["Patch source identification", "R", "C", "I", "R", "I", "-"];
    for (n_idx_col, c_expected) in l_row_expected.iter().enumerate() {
        assert_eq!(
            cell_text(&mut workbook, "RACI Matrix", 3, n_idx_col as u32),
            *c_expected
        );
    }

    assert_eq!(
        cell_text(&mut workbook, "RACI Matrix", 15, 0),
        "Legend: R=Responsible, A=Accountable, C=Consulted, I=Informed"
    );
}

#[test]
fn executive_summary_carries_title_fields_and_sequence_table() {
    let tmp = TestDir::new();
    let path_file_out = tmp.path().join("out.xlsx");
    write_document(&path_file_out).expect("write document");

    let mut workbook = open_generated(&path_file_out);

    assert_eq!(
        cell_text(&mut workbook, "Executive Summary", 0, 0),
        "Patch Management Strategy - Executive Summary"
    );
    assert_eq!(
        cell_text(&mut workbook, "Executive Summary", 1, 0),
        "Document Version:"
    );
    assert_eq!(cell_text(&mut workbook, "Executive Summary", 1, 1), "1.0");

    // Deployment sequence table: header at row 17, first data row at 18.
    assert_eq!(
        cell_text(&mut workbook, "Executive Summary", 17, 0),
        "Sequence"
    );
    assert_eq!(cell_text(&mut workbook, "Executive Summary", 18, 1), "DEV");
    assert_eq!(
        cell_text(&mut workbook, "Executive Summary", 20, 3),
        "Day 5-7"
    );
}

#[test]
fn repeated_runs_produce_identical_content() {
    let tmp = TestDir::new();
    let path_file_a = tmp.path().join("run_a.xlsx");
    let path_file_b = tmp.path().join("run_b.xlsx");

    write_document(&path_file_a).expect("write run a");
    write_document(&path_file_b).expect("write run b");

    let mut workbook_a = open_generated(&path_file_a);
    let mut workbook_b = open_generated(&path_file_b);
    assert_eq!(workbook_a.sheet_names(), workbook_b.sheet_names());

    for c_sheet_name in L_SHEET_NAMES {
        let range_a = workbook_a
            .worksheet_range(c_sheet_name)
            .expect("range run a");
        let range_b = workbook_b
            .worksheet_range(c_sheet_name)
            .expect("range run b");

        assert_eq!(range_a.get_size(), range_b.get_size());
        let l_rows_a: Vec<Vec<Data>> = range_a.rows().map(|row| row.to_vec()).collect();
        let l_rows_b: Vec<Vec<Data>> = range_b.rows().map(|row| row.to_vec()).collect();
        assert_eq!(l_rows_a, l_rows_b, "sheet {c_sheet_name:?} differs between runs");
    }
}

//! Entry point: generate the patch-management policy workbook at the fixed
//! destination path, print a run summary, and exit non-zero on failure.

use std::path::Path;
use std::process;

use patchkit_doc::conf::PATH_FILE_OUT;
use patchkit_doc::workbook::write_document;

fn main() {
    match write_document(Path::new(PATH_FILE_OUT)) {
        Ok(report) => {
            println!("{}", report.format("[DOC]"));
            println!("Excel file created successfully: {PATH_FILE_OUT}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

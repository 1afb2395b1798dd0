//! The 12 sheet builders.
//!
//! Each builder is a straight-line procedure from (worksheet, start row) to
//! the final row cursor: it writes its title band, then alternates section
//! header bands with literal table content, adding one blank spacer row
//! between subsections. Builders never read cells back and never branch on
//! content.

pub mod checklists;
pub mod classification;
pub mod governance;
pub mod promotion;
pub mod raci;
pub mod sop_deploy;
pub mod sop_emergency;
pub mod sop_overview;
pub mod sop_rollback;
pub mod sop_troubleshoot;
pub mod summary;
pub mod testing;

#[cfg(test)]
mod tests {
    use patchkit_io_xlsx::conf::derive_policy_style_set;
    use patchkit_io_xlsx::spec::{SheetWriteError, SpecStyleSet};
    use rust_xlsxwriter::Worksheet;

    type FnSheetBuilder = fn(&mut Worksheet, &SpecStyleSet, u32) -> Result<u32, SheetWriteError>;

    fn run_builder(build: FnSheetBuilder, row_start: u32) -> u32 {
        let mut ws = Worksheet::new();
        let styles = derive_policy_style_set();
        build(&mut ws, &styles, row_start).expect("builder must not fail on a fresh sheet")
    }

    #[test]
    fn builders_return_expected_final_rows() {
        let l_expected: [(FnSheetBuilder, u32); 12] = [
            (super::summary::build, 21),
            (super::promotion::build, 19),
            (super::testing::build, 23),
            (super::classification::build, 15),
            (super::governance::build, 27),
            (super::raci::build, 16),
            (super::checklists::build, 19),
            (super::sop_overview::build, 15),
            (super::sop_deploy::build, 37),
            (super::sop_rollback::build, 25),
            (super::sop_troubleshoot::build, 39),
            (super::sop_emergency::build, 28),
        ];

        for (n_idx, (build, n_row_expected)) in l_expected.into_iter().enumerate() {
            assert_eq!(
                run_builder(build, 0),
                n_row_expected,
                "builder #{n_idx} wrote an unexpected number of rows"
            );
        }
    }

    #[test]
    fn builders_are_relative_to_start_row() {
        assert_eq!(run_builder(super::raci::build, 0) + 4, run_builder(super::raci::build, 4));
        assert_eq!(
            run_builder(super::summary::build, 0) + 7,
            run_builder(super::summary::build, 7)
        );
    }
}

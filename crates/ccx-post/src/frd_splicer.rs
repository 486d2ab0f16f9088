//! Splicing of reconstructed displacement records into a `.frd` file.
//!
//! The FRD format uses fixed-width fields; a nodal record is the `-1`
//! marker, the node number in 10 columns, then one 12-column value per
//! component (cgx manual, § 11).

use std::fs;
use std::path::PathBuf;

use crate::dat_reader::Displacement;
use crate::error::{PostError, Result};
use crate::markers;

/// Lines between the `DISP` dataset header and its first nodal record: one
/// `-4` line and four `-5` component description lines.
const DISP_HEADER_LINES: usize = 5;

/// Copy `<base>.frd` to `<base>-post.frd` with `records` inserted at the
/// start of the first `DISP` dataset.
///
/// The input file is never modified, and nothing is written unless the
/// dataset is exactly where its header says it is.
pub fn splice(base: &str, records: &[(i32, Displacement)]) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{base}.frd"));
    let spliced = splice_str(&crate::read_input(&path)?, records)?;
    let out_path = PathBuf::from(format!("{base}-post.frd"));
    fs::write(&out_path, spliced)?;
    Ok(out_path)
}

/// Splice `records` into raw `.frd` contents, leaving every original line
/// byte-for-byte intact.
pub fn splice_str(raw: &str, records: &[(i32, Displacement)]) -> Result<String> {
    let lines: Vec<&str> = raw.split_inclusive('\n').collect();
    let header = lines
        .iter()
        .position(|line| line.contains(markers::DISP))
        .ok_or(PostError::MarkerNotFound(markers::DISP))?;
    let anchor = header + DISP_HEADER_LINES;
    let anchored = lines.get(anchor).map_or("", |line| line.trim());
    if !anchored.starts_with(markers::BLOCK_END) {
        return Err(PostError::Format(format!(
            "expected {:?} record at line {}, found {anchored:?}",
            markers::BLOCK_END,
            anchor + 1
        )));
    }

    let mut out = String::with_capacity(raw.len() + records.len() * 50);
    for line in &lines[..anchor] {
        out.push_str(line);
    }
    for &(node, [dx, dy, dz]) in records {
        out.push_str(&format_record(node, dx, dy, dz));
    }
    for line in &lines[anchor..] {
        out.push_str(line);
    }
    Ok(out)
}

fn format_record(node: i32, dx: f64, dy: f64, dz: f64) -> String {
    format!(
        " -1{node:>10}{}{}{}\n",
        format_value(dx),
        format_value(dy),
        format_value(dz)
    )
}

/// Signed scientific notation with five fractional digits and a two-digit
/// signed exponent, e.g. ` 1.23456E+00`. Rust's `{:E}` pads neither the
/// sign nor the exponent, so both are reapplied here.
fn format_value(value: f64) -> String {
    let formatted = format!("{value:.5E}");
    let (mantissa, exponent) = formatted.split_once('E').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if mantissa.starts_with('-') { "" } else { " " };
    format!("{sign}{mantissa}E{exponent:+03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRD: &str = "\
    1C job
    1UUSER
  100CL  101 1.00000000         3    1           1
 -4  DISP        4    1
 -5  D1          1    2    1    0
 -5  D2          1    2    2    0
 -5  D3          1    2    3    0
 -5  ALL         1    2    0    0    1ALL
 -3
 9999
";

    #[test]
    fn formats_fixed_width_record() {
        let record = format_record(42, 1.23456, -0.00001, 1000.0);
        assert_eq!(record, " -1        42 1.23456E+00-1.00000E-05 1.00000E+03\n");
    }

    #[test]
    fn formats_zero_and_negative_exponents() {
        assert_eq!(format_value(0.0), " 0.00000E+00");
        assert_eq!(format_value(-0.25), "-2.50000E-01");
        assert_eq!(format_value(3.0e-12), " 3.00000E-12");
    }

    #[test]
    fn splices_records_before_the_block_end() {
        let records = vec![(1, [1.0, 0.0, 0.0]), (2, [0.0, -1.0, 0.0])];
        let out = splice_str(FRD, &records).expect("splice should succeed");

        let original: Vec<&str> = FRD.lines().collect();
        let spliced: Vec<&str> = out.lines().collect();
        assert_eq!(spliced.len(), original.len() + records.len());

        // Everything up to the anchor is untouched, the records follow,
        // then the rest of the original file.
        assert_eq!(&spliced[..8], &original[..8]);
        assert_eq!(spliced[8], " -1         1 1.00000E+00 0.00000E+00 0.00000E+00");
        assert_eq!(spliced[9], " -1         2 0.00000E+00-1.00000E+00 0.00000E+00");
        assert_eq!(&spliced[10..], &original[8..]);
    }

    #[test]
    fn fails_without_disp_dataset() {
        let src = FRD.replace("DISP", "STRESS");
        let err = splice_str(&src, &[]).expect_err("should fail");
        assert!(matches!(err, PostError::MarkerNotFound("DISP")));
    }

    #[test]
    fn fails_when_anchor_is_not_a_block_end() {
        // One description line short: the anchor lands on " 9999".
        let src = FRD.replace(" -5  ALL         1    2    0    0    1ALL\n", "");
        let err = splice_str(&src, &[]).expect_err("should fail");
        match err {
            PostError::Format(msg) => assert!(msg.contains("line 9"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fails_when_anchor_is_past_end_of_file() {
        let err = splice_str(" -4  DISP        4    1\n", &[]).expect_err("should fail");
        assert!(matches!(err, PostError::Format(_)));
    }
}

//! Reader for the nodal displacement table in a CalculiX `.dat` file.
//!
//! The displacement table must be followed by the internal energy table,
//! i.e. the deck contained:
//!
//! ```text
//! *NODE PRINT,NSET=Nall
//! U
//! *EL PRINT,ELSET=Eall
//! ELSE
//! ```

use std::path::PathBuf;

use crate::error::{PostError, Result};
use crate::markers;

/// Nodal displacement (dx, dy, dz).
pub type Displacement = [f64; 3];

/// Read the original node displacements from `<base>.dat`.
///
/// The result is in file order, which is ascending node order. Note that
/// node numbers start at 1 while offsets start at 0, so node `n` sits at
/// index `n - 1`.
pub fn read_displacements(base: &str) -> Result<Vec<Displacement>> {
    let path = PathBuf::from(format!("{base}.dat"));
    parse_displacements(&crate::read_input(&path)?)
}

/// Parse the displacement table from raw `.dat` contents.
pub fn parse_displacements(raw: &str) -> Result<Vec<Displacement>> {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    // The energy table starts two lines after its marker; the displacement
    // data ends three lines before that.
    let end = (position_containing(&lines, markers::ENERGY)? + 2).saturating_sub(3);
    let start = position_containing(&lines, markers::DISPLACEMENTS)? + 2;
    if start > end {
        return Err(PostError::Format(format!(
            "displacement table (line {}) does not precede energy table (line {})",
            start + 1,
            end + 1
        )));
    }

    let mut displacements = Vec::with_capacity(end - start);
    for line in &lines[start..end] {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(PostError::Format(format!(
                "displacement line {line:?} has {} fields, expected node number and 3 components",
                fields.len()
            )));
        }
        let mut value = [0.0; 3];
        for (slot, token) in fields[1..4].iter().enumerate() {
            value[slot] = token
                .parse()
                .map_err(|_| PostError::Parse(format!("invalid displacement value {token:?}")))?;
        }
        displacements.push(value);
    }
    Ok(displacements)
}

fn position_containing(lines: &[&str], marker: &'static str) -> Result<usize> {
    lines
        .iter()
        .position(|line| line.contains(marker))
        .ok_or(PostError::MarkerNotFound(marker))
}

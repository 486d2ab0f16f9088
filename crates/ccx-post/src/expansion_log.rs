//! Reader for the CalculiX `.12d` element expansion log.
//!
//! The log records how each flat element was expanded into a volume element.
//! One element occupies a five-line block:
//!
//! ```text
//! ELEMENT      <id> ...
//! <6 original node numbers>
//! <line skipped>
//! <first half of the expanded node numbers>
//! <second half of the expanded node numbers>
//! ```
//!
//! This layout is the one written by CalculiX 2.15. A log from another
//! version is rejected with a format error rather than silently misparsed.

use std::path::PathBuf;

use crate::error::{PostError, Result};
use crate::markers;

/// Nodes per flat element for the supported topology.
pub const ORIG_NODES: usize = 6;
/// Nodes per expanded element.
pub const EXPANDED_NODES: usize = 15;

/// Mapping from one original element to its solver-expanded node set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementExpansion {
    /// Element number.
    pub element: i32,
    /// Original node numbers, in connectivity order.
    pub orig: [i32; ORIG_NODES],
    /// Expanded node numbers, in connectivity order.
    pub new: [i32; EXPANDED_NODES],
}

/// Read the element expansion records from `<base>.12d`, in file order.
///
/// Node and element numbers in CalculiX start at 1.
pub fn read_expansion(base: &str) -> Result<Vec<ElementExpansion>> {
    let path = PathBuf::from(format!("{base}.12d"));
    parse_expansion(&crate::read_input(&path)?)
}

/// Parse expansion records from raw `.12d` contents.
pub fn parse_expansion(raw: &str) -> Result<Vec<ElementExpansion>> {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    let mut records = Vec::new();

    for i in (0..lines.len()).filter(|&i| lines[i].starts_with(markers::ELEMENT)) {
        if i + 4 >= lines.len() {
            return Err(PostError::Format(format!(
                "truncated ELEMENT block at line {}",
                i + 1
            )));
        }
        let element = lines[i].split_whitespace().nth(1).ok_or_else(|| {
            PostError::Format(format!("ELEMENT line {} carries no element number", i + 1))
        })?;
        let element = parse_int(element)?;
        let orig = to_array(parse_int_line(lines[i + 1])?, i + 2, "original")?;
        // The expanded connectivity is split over two lines, with one
        // unrelated line in between them and the original nodes.
        let mut new = parse_int_line(lines[i + 3])?;
        new.extend(parse_int_line(lines[i + 4])?);
        let new = to_array(new, i + 4, "expanded")?;
        records.push(ElementExpansion { element, orig, new });
    }
    Ok(records)
}

fn parse_int(token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| PostError::Parse(format!("invalid node or element number {token:?}")))
}

fn parse_int_line(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace().map(parse_int).collect()
}

fn to_array<const N: usize>(ids: Vec<i32>, line: usize, kind: &str) -> Result<[i32; N]> {
    let found = ids.len();
    ids.try_into().map_err(|_| {
        PostError::Format(format!(
            "expected {N} {kind} node numbers near line {line}, found {found}"
        ))
    })
}

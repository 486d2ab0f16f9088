//! Propagation of displacements from original to expanded nodes.

use std::collections::BTreeMap;

use crate::dat_reader::Displacement;
use crate::error::{PostError, Result};
use crate::expansion_log::{ElementExpansion, EXPANDED_NODES};

/// For each slot in the expanded 15-node connectivity, the slot of the
/// original 6-node element whose displacement it inherits. Corner nodes
/// repeat on both layers of the expanded element and mid-side nodes take
/// the value of the nearest original node.
const SOURCE_SLOT: [usize; EXPANDED_NODES] = [0, 1, 2, 0, 1, 2, 3, 4, 5, 3, 4, 5, 0, 1, 2];

/// Compute displacements for the expanded nodes.
///
/// This is a plain copy, not an interpolation: a genuinely new node gets
/// the same displacement as a coincident or nearby original node. A proper
/// transformation would need the element thickness and orientation, which
/// the expansion log does not record.
///
/// When several elements share an expanded node, the element earliest in
/// log order supplies its value; later encounters are skipped without
/// comparison. That policy is inherited from the tool this replaces and is
/// pinned down by tests.
///
/// Returns `(node, displacement)` pairs sorted ascending by node number,
/// one per distinct expanded node.
pub fn propagate_displacements(
    orig: &[Displacement],
    expansion: &[ElementExpansion],
) -> Result<Vec<(i32, Displacement)>> {
    let mut new_disp: BTreeMap<i32, Displacement> = BTreeMap::new();
    for record in expansion {
        for (slot, &node) in record.new.iter().enumerate() {
            if new_disp.contains_key(&node) {
                continue;
            }
            let source = record.orig[SOURCE_SLOT[slot]];
            // Node numbers are 1-based, the displacement table is 0-based.
            let value = usize::try_from(source)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| orig.get(n))
                .ok_or_else(|| {
                    PostError::InvalidData(format!(
                        "element {}: node {source} has no displacement record",
                        record.element
                    ))
                })?;
            new_disp.insert(node, *value);
        }
    }
    Ok(new_disp.into_iter().collect())
}

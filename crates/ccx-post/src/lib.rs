//! Post-processing for CalculiX `*NODE FILE,OUTPUT=3D` runs.
//!
//! With `OUTPUT=3D`, CalculiX expands 1D/2D elements into volume elements
//! but writes no nodal displacements into the `.frd` result file. When the
//! deck also contains `*NODE PRINT,NSET=Nall` for displacement, the missing
//! records can be reconstructed: the original node displacements are read
//! from the `.dat` file, the link between original and expanded elements
//! from the `.12d` log, and the reconstructed records are spliced into a
//! copy of the `.frd` file.
//!
//! The pipeline is four stateless stages wired together by [`run`]:
//!
//! 1. [`read_displacements`] — original nodal displacements from `<base>.dat`
//! 2. [`read_expansion`] — original-to-expanded node mapping from `<base>.12d`
//! 3. [`propagate_displacements`] — displacements for the expanded nodes
//! 4. [`splice`] — records inserted into a copy of `<base>.frd`, written to
//!    `<base>-post.frd`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod dat_reader;
pub mod error;
pub mod expansion_log;
pub mod frd_splicer;
pub mod propagate;

pub use dat_reader::{Displacement, parse_displacements, read_displacements};
pub use error::{PostError, Result};
pub use expansion_log::{ElementExpansion, parse_expansion, read_expansion};
pub use frd_splicer::{splice, splice_str};
pub use propagate::propagate_displacements;

/// Marker tokens locating data regions in the solver's text output. The
/// layouts they anchor are tied to a specific CalculiX version; see the
/// individual readers.
pub mod markers {
    /// Start of the nodal displacement table in the `.dat` file.
    pub const DISPLACEMENTS: &str = "displacements";
    /// Internal energy table following the displacements in the `.dat` file.
    pub const ENERGY: &str = "energy";
    /// Start of one element record in the `.12d` expansion log.
    pub const ELEMENT: &str = "ELEMENT";
    /// Nodal displacement dataset header in the `.frd` file.
    pub const DISP: &str = "DISP";
    /// End-of-block record in the `.frd` file.
    pub const BLOCK_END: &str = "-3";
}

/// Run the whole pipeline for `<base>.dat`, `<base>.12d` and `<base>.frd`.
///
/// Writes `<base>-post.frd` and returns its path. The output file is only
/// written once all parsing, propagation and the splice anchor check have
/// succeeded; any earlier failure leaves the filesystem untouched.
pub fn run(base: &str) -> Result<PathBuf> {
    let orig = read_displacements(base)?;
    let expansion = read_expansion(base)?;
    let new = propagate_displacements(&orig, &expansion)?;
    splice(base, &new)
}

/// Read an input file whole, turning a missing file into the dedicated
/// error variant.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => PostError::FileNotFound(path.to_path_buf()),
        _ => PostError::Io(err),
    })
}

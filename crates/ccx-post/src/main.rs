use std::process::ExitCode;

const USAGE: &str = "\
Post-process CalculiX OUTPUT=3D results to restore node displacements.

When *NODE FILE,OUTPUT=3D is used, the solver expands 1D/2D elements but
writes no displacement records into the .frd file. Add

    *NODE PRINT,NSET=Nall

for displacement to the deck; this tool then pulls the displacement data
from <base>.dat, the link between original and expanded elements from
<base>.12d, and writes <base>-post.frd with the missing records restored.

usage: ccx-post <basename>";

fn main() -> ExitCode {
    let Some(base) = std::env::args().nth(1) else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    match ccx_post::run(&base) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ccx-post: {err}");
            ExitCode::from(1)
        }
    }
}

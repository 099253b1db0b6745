use anyhow::{bail, Result};
use provider::Diagnostics;

/// Prints every diagnostic to stderr and fails if any of them is an error.
pub(crate) fn check(diagnostics: &Diagnostics) -> Result<()> {
    for diagnostic in diagnostics.iter() {
        eprintln!("{}\n", diagnostic);
    }
    let errors = diagnostics.errors().count();
    if errors > 0 {
        bail!("{} error(s) reported", errors);
    }
    Ok(())
}

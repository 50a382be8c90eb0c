use crate::core::{SourceKey, METHODS};
use anyhow::Result;
use std::io::{self, Write};

pub fn list_methods() -> Result<()> {
    let stdout = io::stdout();
    write_methods(&mut stdout.lock())
}

/// Lists sources and sort methods in selection order.
pub fn write_methods(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Sources:")?;
    for source in SourceKey::ALL {
        writeln!(out, "  {:<5} {}", source.key(), source.label())?;
    }
    writeln!(out)?;
    writeln!(out, "Sort methods (score column):")?;
    for method in METHODS {
        writeln!(out, "  {:<5} {}", method.key(), method.column())?;
    }
    Ok(())
}

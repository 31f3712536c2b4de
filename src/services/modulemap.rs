use crate::domain::models::{Module, UmbrellaLayout};
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Render and write `module.modulemap` for a classified layout.
///
/// The output handle lives only in this scope, so it is closed on every
/// exit path, including a write failing partway through. A partial file on
/// disk is acceptable: the caller treats anything short of success as a
/// failed build step and never consumes the artifact.
pub fn write_module_map(module: &Module, layout: UmbrellaLayout) -> anyhow::Result<()> {
    let path = module.module_map_path();
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "module {} {{", module.name)?;
    match layout {
        UmbrellaLayout::FlatHeaders => writeln!(out, "    umbrella \".\"")?,
        UmbrellaLayout::ModuleNameDir => writeln!(out, "    umbrella \"{}\"", module.name)?,
        UmbrellaLayout::HeaderFile => {
            writeln!(out, "    header \"{}/{}.h\"", module.name, module.name)?
        }
    }
    writeln!(out, "    link \"{}\"", module.name)?;
    writeln!(out, "    export *")?;
    writeln!(out, "}}")?;
    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

use crate::domain::models::{GenerateOutcome, Module};
use crate::services::{layout, modulemap, scan};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Generate `module.modulemap` for a module unless it already exists.
///
/// An existing descriptor is never regenerated or overwritten; its presence
/// alone makes the call a no-op. A module whose include directory is missing
/// gets the directory created and a single-newline placeholder descriptor,
/// announced with a non-fatal warning. Everything else runs scan → classify
/// → write, propagating layout rejections and I/O failures unchanged.
pub fn generate_module_map(module: &Module) -> anyhow::Result<GenerateOutcome> {
    if module.name.is_empty() {
        anyhow::bail!("module name must not be empty");
    }

    let map_path = module.module_map_path();
    if map_path.is_file() {
        return Ok(GenerateOutcome::AlreadyPresent);
    }

    if !module.path.is_dir() {
        eprintln!(
            "warning: no include directory for module {}, generating empty module map",
            module.name
        );
        fs::create_dir_all(&module.path).with_context(|| {
            format!("creating include directory {}", module.path.display())
        })?;
        fs::write(&map_path, "\n")
            .with_context(|| format!("writing {}", map_path.display()))?;
        return Ok(GenerateOutcome::EmptyPlaceholder);
    }

    let listing = scan::list_include_dir(&module.path)?;
    let layout = layout::classify(&module.name, &listing.headers, &listing.dirs)?;
    modulemap::write_module_map(module, layout)?;
    Ok(GenerateOutcome::Written(layout))
}

/// Generate module maps for every immediate subdirectory of a sources root,
/// each treated as a module named after its directory. The first rejection
/// fails the whole run; a module that cannot be classified fails the build.
pub fn generate_all(sources: &Path) -> anyhow::Result<Vec<(Module, GenerateOutcome)>> {
    let entries = fs::read_dir(sources)
        .with_context(|| format!("reading sources directory {}", sources.display()))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            anyhow::bail!(
                "module directory name is not valid UTF-8: {}",
                entry.path().display()
            );
        };
        let module = Module::new(name, entry.path());
        let outcome = generate_module_map(&module)?;
        out.push((module, outcome));
    }
    Ok(out)
}

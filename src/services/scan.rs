use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Immediate children of an include directory, split into header files and
/// subdirectories, in `read_dir` enumeration order.
#[derive(Debug)]
pub struct IncludeListing {
    pub headers: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

/// List a module's include directory, non-recursively. Only files with a
/// `.h` extension count as headers; everything else at the top level is
/// ignored. The "directory does not exist" case is handled upstream by the
/// generation orchestrator.
pub fn list_include_dir(dir: &Path) -> anyhow::Result<IncludeListing> {
    let mut headers = Vec::new();
    let mut dirs = Vec::new();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading include directory {}", dir.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("reading include directory {}", dir.display()))?;
        let path = entry.path();
        // Metadata-based checks: a symlinked header or subdirectory counts
        // as what it points to.
        if path.is_dir() {
            dirs.push(path);
        } else if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("h") {
            headers.push(path);
        }
    }

    Ok(IncludeListing { headers, dirs })
}

use crate::domain::models::UmbrellaLayout;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("unsupported include layout for module: {0}")]
    UnsupportedLayout(String),
}

/// Classify an include directory's shape from its immediate children.
///
/// `headers` and `dirs` arrive in the scanner's enumeration order; the first
/// directory whose base name equals the module name is the qualifying
/// subdirectory. Anything ambiguous is rejected rather than guessed.
pub fn classify(
    name: &str,
    headers: &[PathBuf],
    dirs: &[PathBuf],
) -> Result<UmbrellaLayout, LayoutError> {
    if dirs.is_empty() {
        if headers.is_empty() {
            return Err(LayoutError::UnsupportedLayout(name.to_string()));
        }
        return Ok(UmbrellaLayout::FlatHeaders);
    }

    let module_dir = dirs
        .iter()
        .find(|d| d.file_name().and_then(|f| f.to_str()) == Some(name));
    let Some(module_dir) = module_dir else {
        return Err(LayoutError::UnsupportedLayout(name.to_string()));
    };
    // Loose top-level headers next to a qualifying subdirectory are ambiguous.
    if !headers.is_empty() {
        return Err(LayoutError::UnsupportedLayout(name.to_string()));
    }

    if module_dir.join(format!("{}.h", name)).is_file() {
        Ok(UmbrellaLayout::HeaderFile)
    } else {
        Ok(UmbrellaLayout::ModuleNameDir)
    }
}

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const MODULE_MAP_FILENAME: &str = "module.modulemap";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A C-family module as the build graph describes it: a name (doubling as
/// the link-library name) and the directory that is both module root and
/// public include directory.
#[derive(Debug, Clone)]
pub struct Module {
    pub name: String,
    pub path: PathBuf,
}

impl Module {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn module_map_path(&self) -> PathBuf {
        self.path.join(MODULE_MAP_FILENAME)
    }
}

/// The three include-directory shapes a module map can be inferred from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UmbrellaLayout {
    /// Headers sit directly in the include directory, no subdirectories.
    FlatHeaders,
    /// A single `<name>/` subdirectory holds all headers, no umbrella file.
    ModuleNameDir,
    /// `<name>/<name>.h` inside the qualifying subdirectory is the umbrella.
    HeaderFile,
}

impl UmbrellaLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            UmbrellaLayout::FlatHeaders => "flat_headers",
            UmbrellaLayout::ModuleNameDir => "module_name_dir",
            UmbrellaLayout::HeaderFile => "header_file",
        }
    }

    /// The locator quoted in the descriptor's umbrella/header line.
    pub fn umbrella_locator(&self, name: &str) -> String {
        match self {
            UmbrellaLayout::FlatHeaders => ".".to_string(),
            UmbrellaLayout::ModuleNameDir => name.to_string(),
            UmbrellaLayout::HeaderFile => format!("{}/{}.h", name, name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    AlreadyPresent,
    EmptyPlaceholder,
    Written(UmbrellaLayout),
}

#[derive(Serialize)]
pub struct GenerateReport {
    pub module: String,
    pub status: String,
    pub layout: Option<String>,
    pub module_map: String,
}

/// Tab-separated row form, the non-`--json` output line.
impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.module, self.status, self.module_map)
    }
}

#[derive(Serialize)]
pub struct InspectReport {
    pub module: String,
    pub layout: String,
    pub umbrella: String,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.module, self.layout, self.umbrella)
    }
}

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("modmap").expect("binary under test")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Headers directly in the include root, no subdirectories.
    pub fn make_flat_module(&self, name: &str) -> PathBuf {
        let dir = self.module_dir(name);
        fs::create_dir_all(&dir).expect("create module dir");
        fs::write(dir.join("a.h"), "// a\n").expect("write header");
        fs::write(dir.join("b.h"), "// b\n").expect("write header");
        dir
    }

    /// `<name>/<name>.h` umbrella header, nothing loose at the top level.
    pub fn make_umbrella_header_module(&self, name: &str) -> PathBuf {
        let dir = self.module_dir(name);
        let inner = dir.join(name);
        fs::create_dir_all(&inner).expect("create module subdir");
        fs::write(inner.join(format!("{}.h", name)), "// umbrella\n").expect("write umbrella");
        dir
    }

    /// `<name>/` subdirectory with headers but no umbrella file.
    pub fn make_name_dir_module(&self, name: &str) -> PathBuf {
        let dir = self.module_dir(name);
        let inner = dir.join(name);
        fs::create_dir_all(&inner).expect("create module subdir");
        fs::write(inner.join("impl.h"), "// impl\n").expect("write header");
        dir
    }
}

pub fn read_map(dir: &Path) -> String {
    fs::read_to_string(dir.join("module.modulemap")).expect("read module map")
}

pub fn map_exists(dir: &Path) -> bool {
    dir.join("module.modulemap").is_file()
}

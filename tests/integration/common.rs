use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const NPM_URL: &str = "https://registry.npmjs.org/";
pub const TAOBAO_URL: &str = "https://registry.npmmirror.com/";

pub struct TestEnv {
    pub home: TempDir,
    pub project_dir: TempDir,
    pub bin_dir: TempDir,
}

impl TestEnv {
    /// A fresh environment whose fake npm reports `NPM_URL` until told otherwise.
    pub fn new() -> Self {
        let env = Self {
            home: TempDir::new().expect("failed to create home"),
            project_dir: TempDir::new().expect("failed to create project_dir"),
            bin_dir: TempDir::new().expect("failed to create bin_dir"),
        };
        env.install_fake_npm(&format!(
            r#"state="{state}"
if [ "$1 $2 $3" = "config get registry" ]; then
  if [ -f "$state" ]; then cat "$state"; else echo "{NPM_URL}"; fi
  exit 0
fi
if [ "$1 $2 $3" = "config set registry" ]; then
  printf '%s\n' "$4" > "$state"
  exit 0
fi
echo "unsupported: $*" >&2
exit 1"#,
            state = env.global_state_path().display()
        ));
        env
    }

    /// Build an xxg Command with --home, the fake npm and cwd = project_dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xxg"));
        cmd.arg("--home")
            .arg(self.home.path())
            .env("XXG_MANAGER", self.npm_path())
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .current_dir(self.project_dir.path());
        cmd
    }

    pub fn npm_path(&self) -> PathBuf {
        self.bin_dir.path().join("npm")
    }

    /// File where the fake npm keeps its global registry.
    pub fn global_state_path(&self) -> PathBuf {
        self.bin_dir.path().join("global-registry")
    }

    pub fn global_registry(&self) -> Option<String> {
        fs::read_to_string(self.global_state_path())
            .ok()
            .map(|s| s.trim().to_string())
    }

    pub fn set_global_registry(&self, url: &str) {
        fs::write(self.global_state_path(), format!("{url}\n")).unwrap();
    }

    pub fn install_fake_npm(&self, body: &str) {
        write_script(&self.npm_path(), body);
    }

    pub fn registry_file(&self) -> PathBuf {
        self.home.path().join("xxg-registries.json")
    }

    pub fn npmrc(&self) -> PathBuf {
        self.project_dir.path().join(".npmrc")
    }

    /// Names in the stored registry list, in file order.
    pub fn stored_names(&self) -> Vec<String> {
        let content = fs::read_to_string(self.registry_file()).unwrap();
        let list: serde_json::Value = serde_json::from_str(&content).unwrap();
        list.as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap().to_string())
            .collect()
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
